//! Command handlers
//!
//! One handler per subcommand, each borrowing the [`CliContext`].

use super::context::CliContext;
use crate::gateway::{Notification, NotificationClient, Notifier};
use anyhow::Result;
use std::path::PathBuf;

/// Handler for configuration operations
pub struct ConfigHandler<'a> {
    context: &'a CliContext,
}

impl<'a> ConfigHandler<'a> {
    pub fn new(context: &'a CliContext) -> Self {
        Self { context }
    }

    /// Merge the gateway URL into the config file.
    pub fn handle_set_url(&self, url: &str) -> Result<()> {
        let store = &self.context.config_store;
        store.set_url(url)?;
        println!("Saved url to {}", store.path().display());
        Ok(())
    }
}

/// Handler for the send command
pub struct SendHandler<'a> {
    context: &'a CliContext,
}

impl<'a> SendHandler<'a> {
    pub fn new(context: &'a CliContext) -> Self {
        Self { context }
    }

    /// Perform one notify call with the configured URL. A missing URL is a
    /// no-op, not an error.
    pub fn handle_send(
        &self,
        title: String,
        message: String,
        log_dir: Option<PathBuf>,
        tags: Vec<String>,
    ) -> Result<()> {
        let notifier = Notifier::with_store(self.context.config_store.clone())?;

        let mut notification = Notification::new(title, message).with_tags(tags);
        if let Some(dir) = log_dir {
            notification = notification.with_log_dir(dir);
        }
        notifier.send(&notification)?;
        Ok(())
    }
}
