pub mod user_rows;

pub use user_rows::*;
