use strum_macros::{Display, EnumString, IntoStaticStr};

/// The paginated collections the backend exposes. All of them share the
/// same contract: a JSON array per page, a short or empty array meaning
/// end-of-data.
#[derive(Clone, Copy, Debug, Display, EnumString, Eq, IntoStaticStr, PartialEq)]
pub enum ResourceKind {
    Members,
    Cards,
    Articles,
}

impl ResourceKind {
    pub fn path(self) -> &'static str {
        match self {
            ResourceKind::Members => "api/members",
            ResourceKind::Cards => "api/cards",
            ResourceKind::Articles => "api/articles",
        }
    }
}
