use crate::{IdentityNumber, ParseError, parse};
use std::time::{Duration, Instant};

/// Options that affect scanning.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Also report spans that look like identity numbers but fail validation
    /// (e.g. `120003-2564`, month 00).
    pub include_invalid: bool,
}

/// An identity-number-shaped span found in input.
///
/// `start`/`end` are byte offsets into the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Slice of the original input that matched.
    pub body: String,
    /// Start byte index of the match.
    pub start: usize,
    /// End byte index of the match (exclusive).
    pub end: usize,
    /// The decoded number, or why the span was rejected.
    pub value: Result<IdentityNumber, ParseError>,
}

impl Entity {
    pub fn is_valid(&self) -> bool {
        self.value.is_ok()
    }
}

/// Result from [`scan`] and [`scan_with`].
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// The scanned input text.
    pub text: String,
    /// Entities in order of appearance.
    pub results: Vec<Entity>,
    /// Total elapsed time spent scanning.
    pub elapsed: Duration,
}

/// Scan `text` for identity numbers with default [`Options`].
///
/// Only valid numbers are returned.
///
/// # Example
/// ```
/// use swedish_ssn::scan;
///
/// let out = scan("Born 810504-8303, registered 2014.");
/// assert_eq!(out.results.len(), 1);
/// assert_eq!(out.results[0].body, "810504-8303");
/// assert_eq!(out.results[0].start, 5);
/// ```
pub fn scan(text: &str) -> ScanResult {
    scan_with(text, &Options::default())
}

/// Scan `text` for identity numbers using `options`.
pub fn scan_with(text: &str, options: &Options) -> ScanResult {
    let started = Instant::now();
    let pattern = regex!(r"\b[0-9]{6}[-+]\w{4}\b");

    let mut results = Vec::new();
    for m in pattern.find_iter(text) {
        let value = parse(m.as_str());
        match &value {
            Ok(id) => tracing::debug!(start = m.start(), end = m.end(), year = id.year(), "identity number found"),
            Err(err) => tracing::debug!(start = m.start(), end = m.end(), kind = err.kind_name(), "candidate rejected"),
        }

        if value.is_err() && !options.include_invalid {
            continue;
        }

        results.push(Entity { body: m.as_str().to_string(), start: m.start(), end: m.end(), value });
    }

    ScanResult { text: text.to_string(), results, elapsed: started.elapsed() }
}
