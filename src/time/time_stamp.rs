use std::str::FromStr;

use derive_more::Display;
use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

use crate::utils::StrExt;

/// A wall-clock time of day with minute resolution.
#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{hour:02}:{minute:02}")]
pub struct TimeStamp {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Time is not valid: {hour:02}:{minute:02}")]
pub struct InvalidTime {
    hour: u8,
    minute: u8,
}

impl TimeStamp {
    #[must_use]
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTime> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTime { hour, minute });
        }

        Ok(Self { hour, minute })
    }

    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }
}

impl FromStr for TimeStamp {
    type Err = anyhow::Error;

    /// Accepts `"HH:MM"` and `"HH:MM:SS"`. Everything past the minute field
    /// is discarded, the backend's `time` columns come back with seconds.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let [hour, minute] = match string.trim().split_exact::<3>(":") {
            [Some(hour), Some(minute), _] => [hour, minute],
            _ => anyhow::bail!("\"{}\" is not a valid time. Expected format: \"HH:MM\"", string),
        };

        Ok(Self::new(hour.parse()?, minute.parse()?)?)
    }
}

impl<'de> Deserialize<'de> for TimeStamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for TimeStamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}
