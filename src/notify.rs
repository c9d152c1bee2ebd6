//! Notify-on-exit handler
//!
//! [`NotifyOnExit`] is the concrete [`ExitHook`] that pushes a message to
//! the gateway when the wrapped work finishes: the configured success
//! message on a clean exit, the rendered failure inside a fenced code block
//! otherwise. Under a multi-process group only rank 0 reports.

use crate::distributed::{EnvProcessGroup, ProcessGroup};
use crate::errors::AppResult;
use crate::exit::{ExitHook, Failure};
use crate::gateway::{Notification, NotificationClient, Notifier};
use std::path::PathBuf;
use tracing::warn;

/// Success message, literal or deferred
///
/// The deferred form keeps expensive message construction off the failure
/// path; the producer runs only once success is confirmed.
pub enum SuccessMessage {
    Literal(String),
    Lazy(Box<dyn Fn() -> String + Send + Sync>),
}

impl SuccessMessage {
    pub fn lazy(producer: impl Fn() -> String + Send + Sync + 'static) -> Self {
        SuccessMessage::Lazy(Box::new(producer))
    }

    fn resolve(&self) -> String {
        match self {
            SuccessMessage::Literal(message) => message.clone(),
            SuccessMessage::Lazy(producer) => producer(),
        }
    }
}

impl From<&str> for SuccessMessage {
    fn from(message: &str) -> Self {
        SuccessMessage::Literal(message.to_string())
    }
}

impl From<String> for SuccessMessage {
    fn from(message: String) -> Self {
        SuccessMessage::Literal(message)
    }
}

/// Exit hook that reports through the notification gateway
pub struct NotifyOnExit {
    title: String,
    message: SuccessMessage,
    log_dir: Option<PathBuf>,
    tags: Vec<String>,
    client: Box<dyn NotificationClient>,
    group: Box<dyn ProcessGroup>,
}

impl NotifyOnExit {
    /// Handler dispatching through the default [`Notifier`] and the
    /// environment-derived process group.
    pub fn new(title: impl Into<String>, message: impl Into<SuccessMessage>) -> AppResult<Self> {
        Ok(NotifyOnExit {
            title: title.into(),
            message: message.into(),
            log_dir: None,
            tags: Vec::new(),
            client: Box::new(Notifier::new()?),
            group: Box::new(EnvProcessGroup),
        })
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Substitute the delivery client (tests, dry runs).
    pub fn with_client(mut self, client: Box<dyn NotificationClient>) -> Self {
        self.client = client;
        self
    }

    /// Substitute the rank query.
    pub fn with_group(mut self, group: Box<dyn ProcessGroup>) -> Self {
        self.group = group;
        self
    }

    // Delivery failures are logged and swallowed on both paths: a notify
    // error inside `on_failure` must not mask the failure being reported.
    fn dispatch(&self, message: String) {
        let mut notification =
            Notification::new(&self.title, message).with_tags(self.tags.iter().cloned());
        if let Some(dir) = &self.log_dir {
            notification = notification.with_log_dir(dir);
        }
        if let Err(error) = self.client.send(&notification) {
            warn!(%error, title = %self.title, "exit notification failed");
        }
    }
}

impl ExitHook for NotifyOnExit {
    fn on_success(&self) {
        if !self.group.is_primary() {
            return;
        }
        // Single line breaks render as paragraph breaks on the gateway's
        // markdown side.
        let message = self.message.resolve().replace('\n', "\n\n");
        self.dispatch(message);
    }

    fn on_failure(&self, failure: &Failure) {
        if !self.group.is_primary() {
            return;
        }
        self.dispatch(format!("```shell\n{}\n```", failure.render()));
    }
}
