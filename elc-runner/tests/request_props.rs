//! Property tests for request parsing.

use elc_core::PercentileBracket;
use elc_runner::{Request, RequestError};
use proptest::prelude::*;

proptest! {
    /// Any in-range pair formatted as `lower,upper` parses back to the same bracket.
    #[test]
    fn valid_pairs_parse_to_brackets(lower in 0.0..99.0_f64, width in 0.001..1.0_f64) {
        let upper = (lower + width * (100.0 - lower)).min(100.0);
        prop_assume!(lower < upper);
        let line = format!("{lower},{upper}");
        let expected = PercentileBracket::new(lower, upper).unwrap();
        prop_assert_eq!(line.parse::<Request>(), Ok(Request::Bracket(expected)));
    }

    /// Reversed or equal bounds are always rejected as a range error.
    #[test]
    fn non_increasing_pairs_are_range_errors(a in 0.0..100.0_f64, b in 0.0..100.0_f64) {
        let (lower, upper) = if a >= b { (a, b) } else { (b, a) };
        let line = format!("{lower},{upper}");
        prop_assert!(matches!(line.parse::<Request>(), Err(RequestError::InvalidRange(_))));
    }

    /// A third token other than GO is a format error, whatever the bounds.
    #[test]
    fn unknown_suffix_is_format_error(suffix in "[a-zA-Z]{1,6}") {
        prop_assume!(!suffix.eq_ignore_ascii_case("go"));
        let line = format!("0,1,{suffix}");
        prop_assert_eq!(line.parse::<Request>(), Err(RequestError::InvalidFormat));
    }
}
