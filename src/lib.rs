pub mod backup;
pub mod config;
pub mod console;
pub mod error;
pub mod fixes;
pub mod patcher;
pub mod report;

pub use config::Config;
pub use error::FixError;
pub use patcher::{Patcher, RunOutcome};
