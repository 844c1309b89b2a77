//! Action log messages.
//!
//! Builds `User <username> performed <action> at <timestamp>` lines. The
//! message is only constructed and returned; writing it anywhere is the
//! caller's job.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rendered in place of an omitted action or username.
pub const PLACEHOLDER: &str = "undefined";

/// How the timestamp at the end of a message is rendered.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
  /// `Sun Oct 18 2026 09:30:05 GMT+0000`
  #[default]
  Human,
  /// `2026-10-18T09:30:05+00:00`
  Rfc3339,
  /// `Sun, 18 Oct 2026 09:30:05 +0000`
  Rfc2822,
}

impl TimestampFormat {
  pub fn render(self, at: &DateTime<Utc>) -> String {
    match self {
      Self::Human => at.format("%a %b %d %Y %H:%M:%S GMT%z").to_string(),
      Self::Rfc3339 => at.to_rfc3339(),
      Self::Rfc2822 => at.to_rfc2822(),
    }
  }
}

/// A single "user performed action" event. Never stored; render it with
/// [`ActionLog::render`] or `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLog {
  pub username: Option<String>,
  pub action:   Option<String>,
  pub at:       DateTime<Utc>,
}

impl ActionLog {
  /// Capture an event at the current wall-clock time.
  pub fn new(action: Option<&str>, username: Option<&str>) -> Self {
    Self::at(action, username, Utc::now())
  }

  pub fn at(
    action: Option<&str>,
    username: Option<&str>,
    at: DateTime<Utc>,
  ) -> Self {
    Self {
      username: username.map(str::to_owned),
      action: action.map(str::to_owned),
      at,
    }
  }

  pub fn render(&self, format: TimestampFormat) -> String {
    format!(
      "User {} performed {} at {}",
      self.username.as_deref().unwrap_or(PLACEHOLDER),
      self.action.as_deref().unwrap_or(PLACEHOLDER),
      format.render(&self.at),
    )
  }
}

impl fmt::Display for ActionLog {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.render(TimestampFormat::default()))
  }
}

/// Build a log line for `username` performing `action`, stamped with the
/// current time. `None` for either argument renders as [`PLACEHOLDER`].
pub fn log_action(action: Option<&str>, username: Option<&str>) -> String {
  log_action_at(action, username, Utc::now())
}

/// [`log_action`] with a caller-supplied instant.
pub fn log_action_at(
  action: Option<&str>,
  username: Option<&str>,
  at: DateTime<Utc>,
) -> String {
  let message = ActionLog::at(action, username, at).to_string();
  tracing::debug!(len = message.len(), "built action log message");
  message
}
