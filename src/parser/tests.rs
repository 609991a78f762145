use crate::identity::{Separator, resolve_century};
use crate::{IdentityNumber, ParseError, parse};

#[test]
fn decodes_valid_numbers() {
    // (input, year, month name, day, code)
    let cases: Vec<(&str, i32, &str, u32, &str)> = vec![
        ("810504-8303", 1981, "May", 4, "8303"),
        ("140202-0166", 2014, "February", 2, "0166"),
        ("141130+2951", 1914, "November", 30, "2951"),
        ("060901-2829", 2006, "September", 1, "2829"),
        ("060901+2829", 1906, "September", 1, "2829"),
        ("150101-1234", 1915, "January", 1, "1234"),
        ("150101+1234", 1815, "January", 1, "1234"),
        ("000101-0000", 2000, "January", 1, "0000"),
        ("991231+9999", 1899, "December", 31, "9999"),
        ("810231-ABCD", 1981, "February", 31, "ABCD"),
    ];

    for (input, year, month, day, code) in cases {
        let id = parse(input).unwrap_or_else(|err| panic!("'{input}' should parse, got {err:?}"));
        assert_eq!(id.year(), year, "year of '{input}'");
        assert_eq!(id.month_name(), month, "month of '{input}'");
        assert_eq!(id.day(), day, "day of '{input}'");
        assert_eq!(id.code(), code, "code of '{input}'");
    }
}

#[test]
fn rejects_malformed_numbers() {
    let cases: Vec<(&str, ParseError)> = vec![
        ("", ParseError::InvalidLength),
        ("8105048303", ParseError::InvalidLength),
        ("19810504-8303", ParseError::InvalidLength),
        ("81050-8303", ParseError::InvalidLength),
        ("121403-25644", ParseError::InvalidLength),
        ("810504_8303", ParseError::InvalidSeparator),
        ("8105048-303", ParseError::InvalidSeparator),
        ("-20101-2564", ParseError::InvalidYear),
        ("+50101-2564", ParseError::InvalidYear),
        ("a10504-8303", ParseError::InvalidYear),
        ("120003-2564", ParseError::InvalidMonth),
        ("121403-2564", ParseError::InvalidMonth),
        ("12x103-2564", ParseError::InvalidMonth),
        ("121200-2564", ParseError::InvalidDay),
        ("121233-2564", ParseError::InvalidDay),
        ("12120 -2564", ParseError::InvalidDay),
    ];

    for (input, expected) in cases {
        assert_eq!(parse(input), Err(expected), "input '{input}'");
    }
}

#[test]
fn first_failing_check_wins() {
    // Bad separator hides the bad month and day.
    assert_eq!(parse("129999_2564"), Err(ParseError::InvalidSeparator));
    // Bad year hides the bad month.
    assert_eq!(parse("xx9901-2564"), Err(ParseError::InvalidYear));
    // Bad month hides the bad day.
    assert_eq!(parse("121399-2564"), Err(ParseError::InvalidMonth));
}

#[test]
fn length_counts_characters_not_bytes() {
    // 11 characters, 12 bytes: the length check passes and the day fails.
    assert_eq!(parse("81050é-8303"), Err(ParseError::InvalidDay));
    // 11 bytes but only 10 characters.
    assert_eq!(parse("81050-830é"), Err(ParseError::InvalidLength));

    let id = parse("810504-83é3").unwrap();
    assert_eq!(id.code(), "83é3");
}

#[test]
fn century_boundary_through_parse() {
    assert_eq!(parse("140101-0000").unwrap().year(), 2014);
    assert_eq!(parse("150101-0000").unwrap().year(), 1915);
    assert_eq!(parse("140101+0000").unwrap().year(), 1914);
    assert_eq!(parse("150101+0000").unwrap().year(), 1815);
}

#[test]
fn resolved_year_is_consistent_with_separator_and_digits() {
    for yy in 0..100u32 {
        for sep in ['-', '+'] {
            let input = format!("{yy:02}0101{sep}0000");
            let id = parse(&input).unwrap();

            let separator = Separator::from_char(sep).unwrap();
            assert_eq!(id.separator(), separator, "input '{input}'");
            assert_eq!(id.year().rem_euclid(100) as u32, yy, "input '{input}'");
            assert_eq!(resolve_century(yy, id.separator()), Some(id.year()), "input '{input}'");
            assert!((1000..=9999).contains(&id.year()));
        }
    }
}

#[test]
fn parsing_is_idempotent() {
    let a = parse("810504-8303").unwrap();
    let b = parse("810504-8303").unwrap();
    assert_eq!(a, b);
}

#[test]
fn display_round_trips() {
    for input in ["810504-8303", "140202-0166", "141130+2951", "991231+abcd", "000101-0000"] {
        let id = parse(input).unwrap();
        assert_eq!(id.to_string(), input);
        assert_eq!(parse(&id.to_string()), Ok(id));
    }
}

#[test]
fn from_str_matches_parse() {
    let id: IdentityNumber = "810504-8303".parse().unwrap();
    assert_eq!(Ok(id), parse("810504-8303"));
    assert_eq!("".parse::<IdentityNumber>(), Err(ParseError::InvalidLength));
}
