//! Parsing and validation of Swedish personal identity numbers.
//!
//! The accepted format is `YYMMDD[-|+]XXXX`. The separator doubles as a
//! century marker: `+` is written once the holder has turned 100.
//!
//! ```
//! use swedish_ssn::{ParseError, parse};
//!
//! let id = parse("141130+2951").unwrap();
//! assert_eq!(id.year(), 1914);
//! assert_eq!(id.month_name(), "November");
//!
//! assert_eq!(parse("121233-2564"), Err(ParseError::InvalidDay));
//! ```

#[macro_use]
mod macros;
mod api;
mod error;
mod identity;
mod parser;

pub use api::{Entity, Options, ScanResult, scan, scan_with};
pub use error::ParseError;
pub use identity::{CENTURY_THRESHOLD, IdentityNumber, MONTH_NAMES, Separator, resolve_century};
pub use parser::parse;
