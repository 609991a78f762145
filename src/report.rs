//! Terminal rendering of decoded identity numbers and scan results.

use chrono::NaiveDate;
use swedish_ssn::{IdentityNumber, ParseError, ScanResult};

/// ANSI styling. A disabled palette (`--no-color`, or stdout is not a
/// terminal) returns text unchanged.
mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        /// Validity mark shown in front of each number.
        pub fn status(&self, valid: bool) -> String {
            if valid { self.paint("✓", GREEN) } else { self.paint("✗", RED) }
        }
    }
}

pub fn print_number(input: &str, result: &Result<IdentityNumber, ParseError>, today: NaiveDate, color: bool) {
    let palette = ansi::Palette::new(color);
    match result {
        Ok(id) => print_identity(input, id, today, &palette),
        Err(err) => print_error(input, err, &palette),
    }
}

pub fn print_scan(res: &ScanResult, today: NaiveDate, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.paint("━━━ Scan ━━━", ansi::GRAY));

    if res.results.is_empty() {
        println!("{}", palette.dim("  No identity numbers found"));
    }

    for (idx, ent) in res.results.iter().enumerate() {
        println!(
            "  {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.paint(format!("span {}..{}", ent.start, ent.end), ansi::YELLOW),
        );
        match &ent.value {
            Ok(id) => print_identity(&ent.body, id, today, &palette),
            Err(err) => print_error(&ent.body, err, &palette),
        }
    }

    println!("\n  {} {}", palette.dim("Elapsed:"), palette.paint(format!("{:?}", res.elapsed), ansi::GREEN));
    println!();
}

fn print_identity(input: &str, id: &IdentityNumber, today: NaiveDate, palette: &ansi::Palette) {
    println!("  {} {}", palette.status(true), palette.bold(palette.paint(input, ansi::CYAN)));
    println!(
        "      {} {}  {} {} {}  {} {}",
        palette.dim("born:"),
        palette.paint(format!("{} {} {}", id.day(), id.month_name(), id.year()), ansi::GREEN),
        palette.dim("│ century:"),
        palette.paint(format!("{}", id.separator().as_char()), ansi::BLUE),
        palette.dim(format!("({}xx)", id.year() / 100)),
        palette.dim("│ code:"),
        palette.paint(id.code(), ansi::YELLOW),
    );

    let age = match id.age_on(today) {
        Some(age) => palette.paint(age.to_string(), ansi::GREEN),
        None if id.birth_date().is_none() => palette.dim("n/a (no such calendar date)"),
        None => palette.dim("n/a (born after today)"),
    };
    println!("      {} {}", palette.dim("age:"), age);
}

fn print_error(input: &str, err: &ParseError, palette: &ansi::Palette) {
    println!("  {} {}", palette.status(false), palette.bold(input));
    println!(
        "      {} {}  {} {}",
        palette.dim("error:"),
        palette.paint(err.kind_name(), ansi::RED),
        palette.dim("│"),
        palette.dim(err.to_string()),
    );
}

#[cfg(test)]
mod tests {
    use super::ansi::Palette;

    #[test]
    fn disabled_palette_leaves_text_plain() {
        let palette = Palette::new(false);
        assert_eq!(palette.status(true), "✓");
        assert_eq!(palette.status(false), "✗");
        assert_eq!(palette.dim("born:"), "born:");
    }

    #[test]
    fn enabled_palette_wraps_status_in_color() {
        let palette = Palette::new(true);
        assert_eq!(palette.status(false), "\x1b[31m✗\x1b[0m");
        assert!(palette.status(true).starts_with("\x1b[32m"));
    }
}
