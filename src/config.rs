// src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use dirwatch_engine::config::{WatchConfig, WatchConfigBuilder};

impl TryFrom<Args> for WatchConfig {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        Ok(WatchConfigBuilder::default().root(args.directory).build()?)
    }
}
