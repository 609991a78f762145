//! Validation errors produced by [`crate::parse`].

/// Why an input was rejected.
///
/// Checks run left to right (length, separator, year, month, day), so the
/// variant always names the *first* field that failed.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    #[error("identity number must be exactly 11 characters (YYMMDD-XXXX)")]
    InvalidLength,

    #[error("separator at position 7 must be '-' or '+'")]
    InvalidSeparator,

    #[error("year must be two digits (00-99)")]
    InvalidYear,

    #[error("month must be two digits between 01 and 12")]
    InvalidMonth,

    #[error("day must be two digits between 01 and 31")]
    InvalidDay,
}

impl ParseError {
    /// Stable snake_case identifier, e.g. `"invalid_month"`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParseError::InvalidLength => "invalid_length",
            ParseError::InvalidSeparator => "invalid_separator",
            ParseError::InvalidYear => "invalid_year",
            ParseError::InvalidMonth => "invalid_month",
            ParseError::InvalidDay => "invalid_day",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_field() {
        assert_eq!(ParseError::InvalidMonth.to_string(), "month must be two digits between 01 and 12");
        assert!(ParseError::InvalidSeparator.to_string().contains("'-' or '+'"));
    }

    #[test]
    fn kind_names_are_distinct() {
        let kinds = [
            ParseError::InvalidLength,
            ParseError::InvalidSeparator,
            ParseError::InvalidYear,
            ParseError::InvalidMonth,
            ParseError::InvalidDay,
        ];
        let mut names: Vec<_> = kinds.iter().map(ParseError::kind_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), kinds.len());
    }
}
