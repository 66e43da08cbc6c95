//! Calendar values exchanged with clients and the gateway.
//!
//! Both types are only constructible through `parse`, which accepts exactly the
//! textual form produced by `format`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed {kind}: {input:?}")]
pub struct MalformedInput {
    pub kind: &'static str,
    pub input: String,
}

impl MalformedInput {
    fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }
}

/// A calendar day without a time of day (`YYYY-MM-DD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateOnly(NaiveDate);

impl DateOnly {
    pub fn parse(input: &str) -> Result<Self, MalformedInput> {
        NaiveDate::parse_from_str(input, DATE_ONLY_FORMAT)
            .ok()
            .map(Self)
            .filter(|parsed| parsed.format() == input)
            .ok_or_else(|| MalformedInput::new("date", input))
    }

    pub fn format(&self) -> String {
        self.0.format(DATE_ONLY_FORMAT).to_string()
    }
}

/// A date and time of day with second precision (`YYYY-MM-DD HH:MM:SS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(NaiveDateTime);

impl DateTime {
    pub fn parse(input: &str) -> Result<Self, MalformedInput> {
        NaiveDateTime::parse_from_str(input, DATE_TIME_FORMAT)
            .ok()
            .map(Self)
            .filter(|parsed| parsed.format() == input)
            .ok_or_else(|| MalformedInput::new("date-time", input))
    }

    pub fn format(&self) -> String {
        self.0.format(DATE_TIME_FORMAT).to_string()
    }

    /// Current UTC wall clock, truncated to whole seconds.
    pub fn now() -> Self {
        Self(Utc::now().naive_utc().trunc_subsecs(0))
    }
}

/// Anything that can be placed on the shared timeline used for ordering checks.
pub trait Temporal {
    fn as_naive(&self) -> NaiveDateTime;
}

impl Temporal for DateOnly {
    fn as_naive(&self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }
}

impl Temporal for DateTime {
    fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

/// `a <= b`, with a `DateOnly` standing for midnight of its day.
pub fn is_before_or_equal(a: &impl Temporal, b: &impl Temporal) -> bool {
    a.as_naive() <= b.as_naive()
}

macro_rules! textual_temporal {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.format())
            }
        }

        impl FromStr for $ty {
            type Err = MalformedInput;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.format())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::parse(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

textual_temporal!(DateOnly);
textual_temporal!(DateTime);
