//! User records and activity filtering.
//!
//! Records come in two shapes: the typed [`User`] and free-form JSON objects.
//! Both expose their activity flag through [`Activity`], so the filtering
//! functions work on either.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Result;

/// The field that marks a record as active.
pub const ACTIVE_FIELD: &str = "isActive";

/// Anything that carries an activity flag.
pub trait Activity {
  /// `true` only when the record is explicitly flagged active.
  fn is_active(&self) -> bool;
}

/// A user record. Fields other than `name` and `isActive` are carried in
/// `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
  #[serde(default)]
  pub name:      String,
  /// Missing in the input means inactive.
  #[serde(rename = "isActive", default)]
  pub is_active: bool,
  #[serde(flatten)]
  pub extra:     Map<String, Value>,
}

impl User {
  pub fn new(name: impl Into<String>, is_active: bool) -> Self {
    Self {
      name: name.into(),
      is_active,
      extra: Map::new(),
    }
  }
}

impl Activity for User {
  fn is_active(&self) -> bool { self.is_active }
}

/// A JSON record is active only if it is an object whose `isActive` member is
/// the boolean `true`. Strings, numbers and missing fields do not count.
impl Activity for Value {
  fn is_active(&self) -> bool {
    self.get(ACTIVE_FIELD) == Some(&Value::Bool(true))
  }
}

impl<T: Activity + ?Sized> Activity for &T {
  fn is_active(&self) -> bool { (**self).is_active() }
}

/// Return the active records of `users`, in their original order.
///
/// The input is not modified; the result holds clones.
pub fn filter_active_users<T>(users: &[T]) -> Vec<T>
where
  T: Activity + Clone,
{
  let active: Vec<T> =
    users.iter().filter(|u| u.is_active()).cloned().collect();
  tracing::debug!(
    total = users.len(),
    active = active.len(),
    "filtered active users"
  );
  active
}

/// Split `users` into `(active, inactive)`, each in original order.
pub fn partition_by_activity<T>(users: &[T]) -> (Vec<T>, Vec<T>)
where
  T: Activity + Clone,
{
  users.iter().cloned().partition(|u| u.is_active())
}

/// Decode a JSON array of user objects.
pub fn parse_users(input: &str) -> Result<Vec<User>> {
  Ok(serde_json::from_str(input)?)
}
