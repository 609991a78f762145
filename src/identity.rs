use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::ParseError;

/// Two-digit years above this value belong to the earlier of the two
/// centuries a separator allows.
pub const CENTURY_THRESHOLD: u32 = 14;

/// English month names, indexed by `month - 1`.
pub static MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The character between the date and the trailing code.
///
/// `Plus` is used once the holder has turned 100, shifting the birth year one
/// century back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    Minus,
    Plus,
}

impl Separator {
    /// `'-'` or `'+'`; anything else is `None`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Separator::Minus),
            '+' => Some(Separator::Plus),
            _ => None,
        }
    }

    /// The character this separator is written as.
    pub fn as_char(self) -> char {
        match self {
            Separator::Minus => '-',
            Separator::Plus => '+',
        }
    }
}

/// Map a two-digit year and its separator to a four-digit year.
///
/// ```text
///            yy <= 14    yy > 14
/// '-'   ->   2000 + yy   1900 + yy
/// '+'   ->   1900 + yy   1800 + yy
/// ```
///
/// The threshold is fixed; it does not move with the clock. Returns `None`
/// when `yy` is not a two-digit year (above 99).
pub fn resolve_century(yy: u32, separator: Separator) -> Option<i32> {
    if yy > 99 {
        return None;
    }
    let base = match (separator, yy > CENTURY_THRESHOLD) {
        (Separator::Minus, false) => 2000,
        (Separator::Minus, true) => 1900,
        (Separator::Plus, false) => 1900,
        (Separator::Plus, true) => 1800,
    };
    Some(base + yy as i32)
}

/// A validated identity number.
///
/// Only [`crate::parse`] (or [`str::parse`]) can build one, so every instance
/// carries a resolved year, a month in `1..=12`, a day in `1..=31` and a
/// four-character code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityNumber {
    year: i32,
    month: u32,
    day: u32,
    code: String,
}

impl IdentityNumber {
    pub(crate) fn new(year: i32, month: u32, day: u32, code: String) -> Self {
        Self { year, month, day, code }
    }

    /// Four-digit birth year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Birth month, `1..=12`.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// English name of the birth month, e.g. `"May"`.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Day of month, `1..=31`. Not checked against the month length.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// The trailing four characters, verbatim.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The separator this number was written with.
    ///
    /// The four century bands produced by [`resolve_century`] do not overlap,
    /// so the year alone decides it: 1915 and later use `-`, earlier years `+`.
    pub fn separator(&self) -> Separator {
        if self.year > 1900 + CENTURY_THRESHOLD as i32 { Separator::Minus } else { Separator::Plus }
    }

    /// Birth date, or `None` when day and month do not exist together
    /// (`310230-...` parses, but there is no 30 February).
    pub fn birth_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Completed years between the birth date and `date`.
    ///
    /// `None` when there is no real birth date or `date` is before it.
    pub fn age_on(&self, date: NaiveDate) -> Option<u32> {
        date.years_since(self.birth_date()?)
    }
}

impl fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{:02}{:02}{}{}",
            self.year.rem_euclid(100),
            self.month,
            self.day,
            self.separator().as_char(),
            self.code
        )
    }
}

impl FromStr for IdentityNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}
