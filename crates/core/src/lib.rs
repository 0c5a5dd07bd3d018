#![forbid(unsafe_code)]

pub mod model;
pub mod pool;
pub mod sampler;
pub mod settings;
pub mod usage;

pub use pool::{CategoryPool, PoolError};
pub use sampler::{DrawOutcome, SamplerError};
pub use settings::{SessionSettings, SettingsError};
pub use usage::UsageTracker;
