use serde::{Deserialize, Serialize};

/// Roster entry shown on the member page grid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub user_id: i64,
    pub avatar_url: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub strength_score: Option<String>,
    pub bio: Option<String>,
    pub avg_arena_wins: Option<f64>,
    pub arena_best_rank: Option<String>,
    pub other_tags: Option<String>,
}
