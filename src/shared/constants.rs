/// Fixed page size for question listings
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Number of seeded trivia categories
pub const CATEGORY_COUNT: usize = 6;

/// Sentinel category id meaning "draw from all categories" in quiz requests
pub const ALL_CATEGORIES: i64 = 0;
