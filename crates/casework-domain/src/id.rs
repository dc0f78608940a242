//! Newtype wrappers for domain identifiers.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies a student. This is the student's external `Documento`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for StudentId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl From<&str> for StudentId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl StudentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifies a family document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FamilyId(pub String);

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for FamilyId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl From<&str> for FamilyId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl FamilyId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifies an institution that is the subject of an institutional intervention.
/// Institutions are not stored as their own collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstitutionId(pub String);

impl fmt::Display for InstitutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for InstitutionId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl InstitutionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Length of a [`HexId`] in characters.
pub const HEX_ID_LEN: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexIdError {
    #[error("hex id must be {HEX_ID_LEN} characters, got {0}")]
    Length(usize),
    #[error("hex id must contain only lowercase hex digits")]
    Charset,
}

/// Advisory uniqueness token stamped on seeded documents.
///
/// Independent of the store's document identifier and carries no referential
/// meaning. Always [`HEX_ID_LEN`] lowercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexId(String);

impl HexId {
    /// Encode raw token bytes as lowercase hex.
    pub fn from_bytes(bytes: [u8; HEX_ID_LEN / 2]) -> Self {
        let mut s = String::with_capacity(HEX_ID_LEN);
        for b in bytes {
            s.push_str(&format!("{b:02x}"));
        }
        Self(s)
    }

    pub fn parse(s: &str) -> Result<Self, HexIdError> {
        if s.len() != HEX_ID_LEN {
            return Err(HexIdError::Length(s.len()));
        }
        if !s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(HexIdError::Charset);
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for HexId {
    type Err = HexIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexId {
    type Error = HexIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<HexId> for String {
    fn from(id: HexId) -> Self {
        id.0
    }
}
