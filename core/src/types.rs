//! Shared primitive types used across the entire engine.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A player identifier as supplied by the scoring subsystem.
///
/// Upstream records are not consistent about whether ids are numbers or
/// strings, so both decode to the same canonical text and compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PlayerId(String);

/// A team identifier. Same decoding rules as [`PlayerId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TeamId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

impl RawId {
    fn into_canonical(self) -> String {
        match self {
            RawId::Int(n) => n.to_string(),
            RawId::Text(s) => s.trim().to_string(),
        }
    }
}

macro_rules! id_newtype {
    ($name:ident) => {
        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into().trim().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<u32> for $name {
            fn from(n: u32) -> Self {
                Self(n.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                RawId::deserialize(d).map(|raw| Self(raw.into_canonical()))
            }
        }
    };
}

id_newtype!(PlayerId);
id_newtype!(TeamId);

/// Which innings of the match. Serialized as `1` / `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Innings {
    First,
    Second,
}

impl Innings {
    pub fn number(self) -> u8 {
        match self {
            Innings::First  => 1,
            Innings::Second => 2,
        }
    }
}

impl TryFrom<u8> for Innings {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Innings::First),
            2 => Ok(Innings::Second),
            other => Err(format!("innings must be 1 or 2, got {other}")),
        }
    }
}

impl From<Innings> for u8 {
    fn from(i: Innings) -> u8 {
        i.number()
    }
}

/// Balls in a standard over.
pub const BALLS_PER_OVER: u32 = 6;

/// A side is all out once this many wickets have fallen.
pub const MAX_WICKETS: u32 = 10;
