//! Serde helpers for values that only implement `Display`.

use std::fmt::Display;

use serde::Serializer;

/// Serialize an optional error (or any `Display` value) as its message.
pub fn serialize_opt_display<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
  T: Display,
  S: Serializer,
{
  match value {
    Some(v) => serializer.collect_str(v),
    None => serializer.serialize_none(),
  }
}
