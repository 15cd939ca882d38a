//! Parsing of the one-line console request.
//!
//! Accepted shapes:
//! - `lower,upper` — a single bracket
//! - `lower,upper,GO` — the full 100-bracket sweep (suffix is
//!   case-insensitive; the bounds are not read)

use std::str::FromStr;

use thiserror::Error;

use elc_core::{BracketError, PercentileBracket};

/// Why a request line was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("Invalid input format. Use 'lower,upper' or 'lower,upper,GO'")]
    InvalidFormat,
    #[error("could not convert string to float: '{0}'")]
    Parse(String),
    #[error("{0}")]
    InvalidRange(#[from] BracketError),
}

/// A parsed request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Request {
    Bracket(PercentileBracket),
    FullSweep,
}

impl FromStr for Request {
    type Err = RequestError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.trim().split(',').collect();
        match parts.as_slice() {
            [_, _, suffix] if suffix.trim().eq_ignore_ascii_case("GO") => Ok(Request::FullSweep),
            [lower, upper] => {
                let lower = parse_bound(lower)?;
                let upper = parse_bound(upper)?;
                Ok(Request::Bracket(PercentileBracket::new(lower, upper)?))
            }
            _ => Err(RequestError::InvalidFormat),
        }
    }
}

fn parse_bound(token: &str) -> Result<f64, RequestError> {
    let token = token.trim();
    token
        .parse::<f64>()
        .map_err(|_| RequestError::Parse(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bracket() {
        let req: Request = "0,1".parse().unwrap();
        assert_eq!(
            req,
            Request::Bracket(PercentileBracket::new(0.0, 1.0).unwrap())
        );
    }

    #[test]
    fn tolerates_whitespace_and_newline() {
        let req: Request = " 12.5 , 40 \n".parse().unwrap();
        assert_eq!(
            req,
            Request::Bracket(PercentileBracket::new(12.5, 40.0).unwrap())
        );
    }

    #[test]
    fn go_suffix_is_case_insensitive_and_ignores_bounds() {
        assert_eq!("0,1,GO".parse::<Request>().unwrap(), Request::FullSweep);
        assert_eq!("0,1, go ".parse::<Request>().unwrap(), Request::FullSweep);
        assert_eq!("x,y,Go".parse::<Request>().unwrap(), Request::FullSweep);
    }

    #[test]
    fn wrong_token_count_is_invalid_format() {
        for line in ["", "5", "1,2,3", "1,2,STOP", "1,2,GO,4"] {
            assert_eq!(
                line.parse::<Request>(),
                Err(RequestError::InvalidFormat),
                "line={line:?}"
            );
        }
    }

    #[test]
    fn non_numeric_is_parse_error() {
        assert_eq!(
            "abc,50".parse::<Request>(),
            Err(RequestError::Parse("abc".into()))
        );
        assert_eq!(
            "10,".parse::<Request>(),
            Err(RequestError::Parse(String::new()))
        );
    }

    #[test]
    fn reversed_bounds_are_invalid_range() {
        assert!(matches!(
            "50,40".parse::<Request>(),
            Err(RequestError::InvalidRange(_))
        ));
        assert!(matches!(
            "0,101".parse::<Request>(),
            Err(RequestError::InvalidRange(_))
        ));
        assert!(matches!(
            "nan,5".parse::<Request>(),
            Err(RequestError::InvalidRange(_))
        ));
    }
}
