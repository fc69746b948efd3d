//! Hong Kong ticker normalization.
//!
//! Accepted shapes (surrounding whitespace is ignored):
//!
//! | Shape      | Example  |
//! |------------|----------|
//! | bare code  | `5`      |
//! | Yahoo      | `5.hk`   |
//! | Bloomberg  | `5 HK`   |
//!
//! Suffixes are matched case-insensitively. Whatever remains after the suffix
//! is removed must be a non-empty run of ASCII digits that fits the code type.

use crate::errors::MarketDataError;
use crate::models::Ticker;

const YAHOO_SUFFIX: &str = ".hk";
const BLOOMBERG_TOKEN: &str = "hk";

/// How [`parse_hk_ticker`] reports input that is not a ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Invalid input is an [`MarketDataError::InvalidTicker`].
    Strict,
    /// Invalid input is `Ok(None)`; the caller decides how to react.
    Lenient,
}

/// Parse a free-form Hong Kong stock identifier into a canonical [`Ticker`].
///
/// In [`ParseMode::Strict`] the result is never `Ok(None)`.
pub fn parse_hk_ticker(raw: &str, mode: ParseMode) -> Result<Option<Ticker>, MarketDataError> {
    match normalize(raw) {
        Some(ticker) => Ok(Some(ticker)),
        None => match mode {
            ParseMode::Strict => Err(MarketDataError::InvalidTicker(raw.to_string())),
            ParseMode::Lenient => Ok(None),
        },
    }
}

fn normalize(raw: &str) -> Option<Ticker> {
    let code = strip_market_suffix(raw.trim());
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    code.parse::<u32>().ok().map(Ticker::from_code)
}

/// Remove a trailing `.hk` or space-separated `HK` token, if present.
fn strip_market_suffix(symbol: &str) -> &str {
    if let Some(split) = symbol.len().checked_sub(YAHOO_SUFFIX.len()) {
        if let (Some(head), Some(tail)) = (symbol.get(..split), symbol.get(split..)) {
            if tail.eq_ignore_ascii_case(YAHOO_SUFFIX) {
                return head;
            }
        }
    }

    if let Some((head, token)) = symbol.rsplit_once(char::is_whitespace) {
        if token.eq_ignore_ascii_case(BLOOMBERG_TOKEN) {
            return head.trim_end();
        }
    }

    symbol
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict(raw: &str) -> Result<Option<Ticker>, MarketDataError> {
        parse_hk_ticker(raw, ParseMode::Strict)
    }

    fn lenient(raw: &str) -> Option<Ticker> {
        parse_hk_ticker(raw, ParseMode::Lenient).unwrap()
    }

    #[test]
    fn test_all_shapes_reduce_to_same_ticker() {
        for code in ["5", "11", "388", "9988", "80737"] {
            let expected = lenient(code).expect("bare code is valid");
            for shape in [
                format!("{code}.hk"),
                format!("{code}.HK"),
                format!("{code}.Hk"),
                format!("{code} HK"),
                format!("{code} hk"),
                format!("  {code} HK  "),
            ] {
                assert_eq!(lenient(&shape), Some(expected), "shape {shape:?}");
            }
        }
    }

    #[test]
    fn test_leading_zeros_are_equivalent() {
        assert_eq!(lenient("05"), lenient("5"));
        assert_eq!(lenient("00005.HK"), lenient("5"));
        assert_eq!(lenient("0005 HK"), Some(Ticker::from_code(5)));
    }

    #[test]
    fn test_invalid_inputs_fail_in_strict_mode() {
        for raw in ["", "   ", "abc", ".hk", "5.hkk", "HK", " HK", "5HK", "5.hk.hk", "+5", "5 5"] {
            match strict(raw) {
                Err(MarketDataError::InvalidTicker(got)) => assert_eq!(got, raw),
                other => panic!("expected InvalidTicker for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_inputs_are_absent_in_lenient_mode() {
        for raw in ["", "abc", ".hk", "5.hkk", "HCS.HK", "hcs.hk"] {
            assert_eq!(lenient(raw), None, "input {raw:?}");
        }
    }

    #[test]
    fn test_oversized_code_is_invalid() {
        assert_eq!(lenient("99999999999999999999"), None);
    }

    #[test]
    fn test_six_digit_code_is_well_formed() {
        assert_eq!(lenient("999999"), Some(Ticker::from_code(999_999)));
    }

    #[test]
    fn test_non_ascii_input_does_not_panic() {
        assert_eq!(lenient("５"), None);
        assert_eq!(lenient("5.ｈk"), None);
        assert_eq!(lenient("é"), None);
    }
}
