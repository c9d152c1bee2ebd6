//! HTTP client for the push-notification gateway
//!
//! The gateway takes one GET request with `title`, `desp` and `tags` query
//! parameters and answers with a JSON body carrying a server-issued push id.
//! Sending is best-effort and synchronous: one blocking round trip, no retry.

use crate::config::ConfigStore;
use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

/// A single outgoing notification
///
/// Built per call and never persisted. The message body is markdown as far
/// as the gateway is concerned; tags are joined with `|` on the wire.
#[derive(Debug, Clone, Default)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub tags: Vec<String>,
    pub log_dir: Option<PathBuf>,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            message: message.into(),
            tags: Vec::new(),
            log_dir: None,
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Directory where the raw gateway reply is written, one file per
    /// notification named after the reply's push id.
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }
}

/// Anything that can deliver a [`Notification`]
///
/// [`Notifier`] is the real implementation; substitutes stand in for it in
/// tests and in code paths that must never touch the network.
pub trait NotificationClient: Send + Sync {
    fn send(&self, notification: &Notification) -> AppResult<()>;
}

/// Blocking gateway client
///
/// The base URL comes from an explicit override or, failing that, from the
/// config store, which is re-read on every send so a `config` run in
/// another process takes effect immediately. With neither in place, `send`
/// is a silent no-op.
pub struct Notifier {
    client: Client,
    store: ConfigStore,
    url_override: Option<String>,
}

impl Notifier {
    /// Client resolving its URL from the default config location.
    pub fn new() -> AppResult<Self> {
        Self::build(ConfigStore::open_default()?, None)
    }

    /// Client with an explicit gateway URL, bypassing the config store.
    pub fn with_url(url: impl Into<String>) -> AppResult<Self> {
        Self::build(ConfigStore::open_default()?, Some(url.into()))
    }

    /// Client reading its URL from a specific config store.
    pub fn with_store(store: ConfigStore) -> AppResult<Self> {
        Self::build(store, None)
    }

    fn build(store: ConfigStore, url_override: Option<String>) -> AppResult<Self> {
        let client = Client::builder().build()?;
        Ok(Notifier {
            client,
            store,
            url_override,
        })
    }

    fn resolve_base_url(&self) -> AppResult<Option<String>> {
        if let Some(url) = &self.url_override {
            return Ok(Some(url.clone()));
        }
        Ok(self.store.load()?.url)
    }

    fn build_url(&self, base: &str, notification: &Notification) -> AppResult<Url> {
        let mut url = Url::parse(base)
            .map_err(|e| AppError::config_with_source(format!("Invalid gateway URL: {base}"), e))?;
        url.query_pairs_mut()
            .append_pair("title", &notification.title)
            .append_pair("desp", &notification.message)
            .append_pair("tags", &notification.tags.join("|"));
        Ok(url)
    }

    fn write_reply_log(&self, dir: &Path, reply: &Value, body: &str) -> AppResult<()> {
        fs::create_dir_all(dir)
            .map_err(|e| AppError::io_with_source(dir, "create log directory", e))?;
        let pushid = reply
            .get("data")
            .and_then(|data| data.get("pushid"))
            .ok_or_else(|| AppError::reply("missing data.pushid"))?;
        let name = match pushid {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let path = dir.join(format!("{name}.txt"));
        fs::write(&path, body)
            .map_err(|e| AppError::io_with_source(&path, "write response log", e))?;
        debug!(path = %path.display(), "logged gateway reply");
        Ok(())
    }
}

impl NotificationClient for Notifier {
    fn send(&self, notification: &Notification) -> AppResult<()> {
        let Some(base) = self.resolve_base_url()? else {
            debug!("no gateway url configured, skipping notification");
            return Ok(());
        };
        let url = self.build_url(&base, notification)?;

        info!(title = %notification.title, "sending notification");
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            let reason = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Status {
                status: status.as_u16(),
                reason,
            });
        }

        let body = response.text()?;
        let reply: Value = serde_json::from_str(&body)
            .map_err(|e| AppError::reply_with_source("reply body is not valid JSON", e))?;

        if let Some(dir) = &notification.log_dir {
            self.write_reply_log(dir, &reply, &body)?;
        }
        info!("notification sent");
        Ok(())
    }
}

/// One-shot send through the configured gateway
///
/// `url` overrides the configured base URL when given. Without any URL at
/// all this returns without contacting the network.
pub fn notify(
    title: &str,
    message: &str,
    log_dir: Option<&Path>,
    tags: &[String],
    url: Option<&str>,
) -> AppResult<()> {
    let notifier = match url {
        Some(url) => Notifier::with_url(url)?,
        None => Notifier::new()?,
    };
    let mut notification = Notification::new(title, message).with_tags(tags.iter().cloned());
    if let Some(dir) = log_dir {
        notification = notification.with_log_dir(dir);
    }
    notifier.send(&notification)
}
