//! Front matter carried in a document's first code block.

use std::collections::BTreeMap;

use jiff::{Timestamp, civil, tz::TimeZone};
use serde::{Deserialize, Serialize};

/// Layout of `date` values, always in UTC.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Caller-defined front matter keys, in key order.
pub type Extra = BTreeMap<String, serde_yaml::Value>;

/// Structured metadata of one document.
///
/// `title` and `date` are required. Keys the renderer does not know about
/// are kept in [`Metadata::extra`] so templates can use them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
  pub title: String,

  #[serde(with = "date")]
  pub date: Timestamp,

  /// Drafts get a page but are not listed.
  #[serde(default)]
  pub draft: bool,

  /// Excluded documents are rendered but never written out.
  #[serde(default)]
  pub exclude: bool,

  #[serde(flatten)]
  pub extra: Extra,
}

impl Metadata {
  /// Decode a YAML payload.
  ///
  /// # Errors
  ///
  /// Fails if the payload is not a mapping, lacks `title` or `date`, or has a
  /// `date` not in [`DATE_FORMAT`].
  pub fn from_payload(payload: &str) -> Result<Self, serde_yaml::Error> {
    serde_yaml::from_str(payload)
  }

  /// Encode back into a YAML payload that [`Metadata::from_payload`] accepts.
  ///
  /// # Errors
  ///
  /// Fails only if an `extra` value cannot be represented in YAML.
  pub fn to_payload(&self) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(self)
  }

  /// The date rendered with [`DATE_FORMAT`].
  #[must_use]
  pub fn formatted_date(&self) -> String {
    format_date(self.date)
  }
}

/// Parse a date in [`DATE_FORMAT`], the only accepted layout.
///
/// # Errors
///
/// Returns the parse error when `input` does not match the layout.
pub fn parse_date(input: &str) -> Result<Timestamp, jiff::Error> {
  civil::DateTime::strptime(DATE_FORMAT, input.trim())?
    .to_zoned(TimeZone::UTC)
    .map(|zoned| zoned.timestamp())
}

/// Format a timestamp with [`DATE_FORMAT`].
#[must_use]
pub fn format_date(timestamp: Timestamp) -> String {
  timestamp.to_zoned(TimeZone::UTC).strftime(DATE_FORMAT).to_string()
}

mod date {
  use jiff::Timestamp;
  use serde::{Deserialize, Deserializer, Serializer, de::Error};

  pub fn serialize<S: Serializer>(
    timestamp: &Timestamp,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&super::format_date(*timestamp))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<Timestamp, D::Error> {
    let raw = String::deserialize(deserializer)?;
    super::parse_date(&raw)
      .map_err(|e| D::Error::custom(format!("invalid date '{raw}': {e}")))
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn test_decode_minimal_payload() {
    let meta = Metadata::from_payload("title: Hello\ndate: 2024-01-02T00:00:00Z\n")
      .expect("payload should decode");
    assert_eq!(meta.title, "Hello");
    assert_eq!(format_date(meta.date), "2024-01-02T00:00:00Z");
    assert!(!meta.draft);
    assert!(!meta.exclude);
    assert!(meta.extra.is_empty());
  }

  #[test]
  fn test_date_only_is_rejected() {
    let err = Metadata::from_payload("title: x\ndate: 2019-06-30\n")
      .expect_err("only the full layout is accepted");
    assert!(err.to_string().contains("invalid date '2019-06-30'"));
  }

  #[test]
  fn test_date_encodes_in_its_decoded_layout() {
    let payload = "title: x\ndate: 2019-06-30T08:09:10Z\n";
    let meta = Metadata::from_payload(payload).expect("payload should decode");
    assert!(
      meta
        .to_payload()
        .expect("payload should encode")
        .contains("2019-06-30T08:09:10Z")
    );
  }

  #[test]
  fn test_unknown_keys_are_kept() {
    let meta = Metadata::from_payload(
      "title: x\ndate: 2024-01-02T10:20:30Z\ndraft: true\ntags: [a, b]\n",
    )
    .expect("payload should decode");
    assert!(meta.draft);
    assert!(meta.extra.contains_key("tags"));
  }

  #[test]
  fn test_missing_fields_fail() {
    assert!(Metadata::from_payload("title: x\n").is_err());
    assert!(Metadata::from_payload("date: 2024-01-02T00:00:00Z\n").is_err());
    assert!(Metadata::from_payload("").is_err());
  }

  #[test]
  fn test_bad_date_fails() {
    let err = Metadata::from_payload("title: x\ndate: yesterday\n")
      .expect_err("date must be validated");
    assert!(err.to_string().contains("invalid date"));
  }

  #[test]
  fn test_payload_round_trip() {
    let original = Metadata::from_payload(
      "title: \"Colons: fine\"\ndate: 2023-12-31T23:59:59Z\nexclude: true\nauthor: someone\n",
    )
    .expect("payload should decode");
    let encoded = original.to_payload().expect("payload should encode");
    let decoded = Metadata::from_payload(&encoded).expect("round trip decodes");
    assert_eq!(decoded, original);
  }
}
