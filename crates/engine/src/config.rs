use derive_builder::Builder;
use std::path::PathBuf;
use std::time::Duration;

/// Time between the start of one wait phase and the next cycle.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(3);

/// Granularity at which the wait phase checks for cancellation.
pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct WatchConfig {
    /// Directory to list every cycle.
    pub root: PathBuf,
    #[builder(default = "DEFAULT_INTERVAL")]
    pub interval: Duration,
    #[builder(default = "DEFAULT_TICK")]
    pub tick: Duration,
    /// Emit the clear-screen sequence before each table.
    #[builder(default = "true")]
    pub clear_screen: bool,
}

impl WatchConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(interval) = self.interval
            && interval.is_zero()
        {
            return Err("interval must be greater than zero".into());
        }
        if let Some(tick) = self.tick
            && tick.is_zero()
        {
            return Err("tick must be greater than zero".into());
        }
        if let Some(root) = &self.root
            && root.as_os_str().is_empty()
        {
            return Err("directory path must not be empty".into());
        }
        Ok(())
    }
}
