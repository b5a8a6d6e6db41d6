use serde::{Deserialize, Serialize};

use crate::user::User;

/// Sentinel parent key for root comments. The backend encodes "no parent"
/// as either a null or a zero `parent_id`.
pub const ROOT_PARENT_ID: i64 = 0;

#[derive(Clone, Debug, Default, PartialEq, Eq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub article_id: i64,
    pub user_id: i64,
    pub user_nickname: String,
    pub parent_id: Option<i64>,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub is_pinned: bool,
}

impl Comment {
    pub fn is_root(&self) -> bool {
        self.parent_key() == ROOT_PARENT_ID
    }

    /// Grouping key of the parent this comment replies to.
    pub fn parent_key(&self) -> i64 {
        self.parent_id.unwrap_or(ROOT_PARENT_ID)
    }
}

/// Per-comment actions the presentation layer may offer the current user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentCapabilities {
    pub can_reply: bool,
    pub can_delete: bool,
    pub can_pin: bool,
}

/// Determines which actions `current_user` may take on `comment`.
///
/// Deleting is open to admins, the comment's creator and the article's
/// author. Pinning is restricted to root comments, by admins and the
/// article's author. Anonymous visitors get no actions at all.
pub fn comment_capabilities(
    current_user: Option<&User>,
    comment: &Comment,
    article_author_id: i64,
) -> CommentCapabilities {
    let Some(user) = current_user else {
        return CommentCapabilities::default();
    };

    let is_owner = comment.user_id == user.user_id;
    let is_article_author = article_author_id == user.user_id;

    CommentCapabilities {
        can_reply: true,
        can_delete: user.is_admin() || is_owner || is_article_author,
        can_pin: comment.is_root() && (user.is_admin() || is_article_author),
    }
}
