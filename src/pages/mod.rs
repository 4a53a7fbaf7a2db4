mod user_search;
mod user_select;

pub use user_search::*;
pub use user_select::*;
