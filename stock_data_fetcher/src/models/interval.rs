use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The interval string was not one of the provider's accepted values.
#[derive(Debug, Error)]
#[error("unrecognized interval '{0}', expected one of: 1d, 1wk, 1mo")]
pub struct ParseIntervalError(pub String);

/// The spacing between bars within the requested window.
///
/// Daily bars are the default, matching the provider's behavior when no
/// interval is given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interval {
    #[default]
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1wk")]
    OneWeek,
    #[serde(rename = "1mo")]
    OneMonth,
}

impl Interval {
    /// The provider's wire representation of this interval.
    pub fn as_str(self) -> &'static str {
        match self {
            Interval::OneDay => "1d",
            Interval::OneWeek => "1wk",
            Interval::OneMonth => "1mo",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1d" => Ok(Interval::OneDay),
            "1wk" => Ok(Interval::OneWeek),
            "1mo" => Ok(Interval::OneMonth),
            other => Err(ParseIntervalError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_daily() {
        assert_eq!(Interval::default(), Interval::OneDay);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("1wk".parse::<Interval>().unwrap(), Interval::OneWeek);
        assert_eq!(Interval::OneMonth.to_string(), "1mo");
        assert!("2d".parse::<Interval>().is_err());
    }
}
