//! Canonical date representation for persisted documents.
//!
//! Every business date is a `DateTime<Utc>` written as RFC 3339 with
//! millisecond precision and a `Z` suffix. Reading accepts any RFC 3339
//! offset, normalizes to UTC and drops sub-millisecond digits;
//! locale-formatted strings are rejected.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub fn format(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| canonical(dt.with_timezone(&Utc)))
}

/// Truncate `dt` to the precision that survives a write.
pub fn canonical(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.trunc_subsecs(3)
}

/// `#[serde(with = "casework_domain::date::rfc3339_ms")]`
pub mod rfc3339_ms {
    use super::*;

    pub fn serialize<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&format(dt))
    }

    pub fn deserialize<'de, D>(d: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(d)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }
}
