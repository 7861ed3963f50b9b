pub mod filter;
pub mod reading;

pub use filter::default_filter;
pub use reading::{katakana_to_hiragana, normalize_reading};
