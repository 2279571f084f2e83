pub mod config;
pub mod driver;
pub mod error;
pub mod generator;
pub mod length;
pub mod prompt;
pub mod style;
pub mod trends;
pub mod types;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use config::{Config, TrendSource};
pub use driver::{Driver, Presets};
pub use error::{Result, TrendPostError};
pub use generator::ContentGenerator;
pub use length::{truncate, word_limit_for};
pub use prompt::build_prompt;
pub use style::style_for;
pub use trends::{ApifyTrendProvider, FileTrendProvider, TrendProvider};
pub use types::{GenerationRequest, Post, TrendSnapshot};
