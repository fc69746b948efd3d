use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::errors::MarketDataError;
use crate::resolver::{parse_hk_ticker, ParseMode};

/// Width of the canonical ticker string. Wider codes are printed as-is.
const CANONICAL_WIDTH: usize = 4;

/// Width of the stock code used by HKEX documents and most HK web sources.
const HKEX_WIDTH: usize = 5;

/// Canonical identifier for a Hong Kong-listed security.
///
/// Only the numeric stock code is kept, so `"5"`, `"0005"`, `"5.HK"` and
/// `"5 HK"` all produce the same value. The canonical string form is the code
/// zero-padded to four digits (`"0005"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticker(u32);

impl Ticker {
    pub fn from_code(code: u32) -> Self {
        Self(code)
    }

    /// Strict parse: any input that is not a recognized ticker shape is an
    /// [`MarketDataError::InvalidTicker`].
    pub fn parse(raw: &str) -> Result<Self, MarketDataError> {
        parse_hk_ticker(raw, ParseMode::Strict)?
            .ok_or_else(|| MarketDataError::InvalidTicker(raw.to_string()))
    }

    /// Lenient parse: invalid input yields `None`.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        parse_hk_ticker(raw, ParseMode::Lenient).ok().flatten()
    }

    pub fn code(&self) -> u32 {
        self.0
    }

    /// Five-digit code as printed by HKEX (`"00005"`).
    pub fn hkex_code(&self) -> String {
        format!("{:0width$}", self.0, width = HKEX_WIDTH)
    }

    /// Yahoo Finance symbol (`"0005.HK"`).
    pub fn yahoo_symbol(&self) -> String {
        format!("{}.HK", self)
    }

    /// Bloomberg symbol (`"5 HK"`).
    pub fn bloomberg_symbol(&self) -> String {
        format!("{} HK", self.0)
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = CANONICAL_WIDTH)
    }
}

impl FromStr for Ticker {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Ticker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
