pub const MEMBER_PAGE_SIZE: usize = 12;
pub const CARD_PAGE_SIZE: usize = 40;
pub const REVIEW_PAGE_SIZE: usize = 10;
pub const ARTICLE_PAGE_SIZE: usize = 20;


// how close to the bottom of the content a scroll position has to be
// before the next page is requested
pub const SCROLL_LOAD_MARGIN_PX: f64 = 200.0;
