//! Small text, record, and message helpers.
//!
//! Every operation here is synchronous and stateless. Nothing is written to
//! disk or to a log sink; callers decide what to do with the returned values.

pub mod action;
pub mod error;
pub mod text;
pub mod user;

pub use action::{
  ActionLog, PLACEHOLDER, TimestampFormat, log_action, log_action_at,
};
pub use error::{Error, Result};
pub use text::{capitalize_value, capitalize_words};
pub use user::{
  Activity, User, filter_active_users, parse_users, partition_by_activity,
};
