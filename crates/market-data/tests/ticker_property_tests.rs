//! Property-based tests for Hong Kong ticker normalization.
//!
//! Every numeric code of one to five digits must normalize to the same
//! [`Ticker`] whichever accepted shape it is written in.

use hkstocks_market_data::{parse_hk_ticker, ParseMode, Ticker};
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

/// Numeric stock codes of one to five digits, leading zeros included.
fn arb_code() -> impl Strategy<Value = String> {
    "[0-9]{1,5}"
}

/// Case variants of the Yahoo suffix.
fn arb_yahoo_suffix() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(".hk"), Just(".HK"), Just(".Hk"), Just(".hK")]
}

/// Case variants of the Bloomberg market token.
fn arb_bloomberg_token() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("HK"), Just("hk"), Just("Hk"), Just("hK")]
}

fn strict(raw: &str) -> Ticker {
    parse_hk_ticker(raw, ParseMode::Strict)
        .unwrap()
        .expect("strict mode never returns None")
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Bare, Yahoo and Bloomberg shapes of a code reduce to one ticker.
    #[test]
    fn prop_all_shapes_normalize_to_same_ticker(
        code in arb_code(),
        yahoo in arb_yahoo_suffix(),
        bloomberg in arb_bloomberg_token(),
    ) {
        let bare = strict(&code);
        prop_assert_eq!(strict(&format!("{code}{yahoo}")), bare);
        prop_assert_eq!(strict(&format!("{code} {bloomberg}")), bare);
        prop_assert_eq!(strict(&format!("  {code}{yahoo} ")), bare);
    }

    /// Leading zeros never change the ticker.
    #[test]
    fn prop_leading_zeros_are_ignored(code in arb_code(), zeros in 0usize..4) {
        let padded = format!("{}{}", "0".repeat(zeros), code);
        prop_assert_eq!(strict(&padded), strict(&code));
        prop_assert_eq!(strict(&code).code(), code.parse::<u32>().unwrap());
    }

    /// The canonical string parses back to the same ticker, and so does
    /// every derived symbol.
    #[test]
    fn prop_canonical_form_round_trips(code in arb_code()) {
        let ticker = strict(&code);
        let canonical = ticker.to_string();
        prop_assert!(canonical.len() >= 4);
        prop_assert_eq!(strict(&canonical), ticker);
        prop_assert_eq!(strict(&ticker.yahoo_symbol()), ticker);
        prop_assert_eq!(strict(&ticker.bloomberg_symbol()), ticker);
        prop_assert_eq!(strict(&ticker.hkex_code()), ticker);
    }

    /// Lenient and strict modes agree on valid input.
    #[test]
    fn prop_lenient_agrees_with_strict(code in arb_code()) {
        prop_assert_eq!(Ticker::parse_lenient(&code), Some(strict(&code)));
    }

    /// Input with a non-digit character in the code never normalizes.
    #[test]
    fn prop_non_digit_code_is_rejected(
        head in "[0-9]{0,3}",
        bad in "[a-zA-Z+\\-_/]",
        tail in "[0-9]{0,3}",
    ) {
        let raw = format!("{head}{bad}{tail}");
        prop_assert!(parse_hk_ticker(&raw, ParseMode::Lenient).unwrap().is_none());
        prop_assert!(parse_hk_ticker(&raw, ParseMode::Strict).is_err());
    }
}
