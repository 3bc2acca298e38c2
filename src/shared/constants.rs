/// Fixed page size for all paginated question listings.
pub const QUESTIONS_PER_PAGE: usize = 10;
