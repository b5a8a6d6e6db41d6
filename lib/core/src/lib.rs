pub mod card;
pub mod comment;
pub mod member;
pub mod pagination;
pub mod thread;
pub mod user;
