//! msg2phone library
//!
//! Sends push notifications through a pre-configured gateway URL and wraps
//! long-running work so that success or failure is reported on exit.
//!
//! ```no_run
//! use msg2phone::{ExitHook, NotifyOnExit};
//!
//! fn train() -> anyhow::Result<()> {
//!     // hours later...
//!     Ok(())
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     let handler = NotifyOnExit::new("training run", "finished")?
//!         .with_tags(["gpu"]);
//!     handler.observe(train)
//! }
//! ```

pub mod cli;
pub mod config;
pub mod distributed;
pub mod errors;
pub mod exit;
pub mod gateway;
pub mod notify;

// Re-export commonly used types for convenience
pub use config::{Config, ConfigStore};
pub use errors::{AppError, AppResult};
pub use exit::{ExitHook, ExitScope, Failure};
pub use gateway::{Notification, NotificationClient, Notifier};
pub use notify::{NotifyOnExit, SuccessMessage};
