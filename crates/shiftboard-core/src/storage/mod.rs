mod json;
mod md;

pub use json::{Sheet, parse_schedule};
pub use md::write_week_markdown;
