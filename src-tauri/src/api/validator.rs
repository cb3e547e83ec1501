//! Field predicates for the student form.
//!
//! The name, contact and roll number checks run on every keystroke and must
//! accept the empty string so the user can clear an input; email is only
//! checked when the form is submitted.

use std::{ops::RangeInclusive, sync::LazyLock};

use regex::Regex;
use time::{format_description::BorrowedFormatItem, macros::format_description, Date};

use super::err::ValidationError;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z ]*$").expect("name pattern is valid"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// 日期选择器的格式
const DOB_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[day]-[month]-[year]");

const DOB_YEARS: RangeInclusive<i32> = 0..=9999;

const CONTACT_MAX_LEN: usize = 10;

fn all_digits(candidate: &str) -> bool {
    candidate.chars().all(|c| c.is_ascii_digit())
}

/// 姓名: 首字符为字母, 其余为字母或空格
pub fn validate_name(candidate: &str) -> bool {
    candidate.is_empty() || NAME_RE.is_match(candidate)
}

/// 联系电话: 不超过10位数字
pub fn validate_contact(candidate: &str) -> bool {
    candidate.is_empty() || (all_digits(candidate) && candidate.len() <= CONTACT_MAX_LEN)
}

/// 学号: 纯数字
pub fn validate_roll_no(candidate: &str) -> bool {
    all_digits(candidate)
}

pub fn validate_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// parse a date of birth as the date picker writes it
///
/// Only years 0000 to 9999 are accepted, so every date that parses can be
/// written back out by [`format_dob`] in the same form.
pub fn parse_dob(text: &str) -> Result<Date, ValidationError> {
    let invalid = || ValidationError::InvalidDate(text.to_string());
    let dob = Date::parse(text, DOB_FORMAT).map_err(|_| invalid())?;
    if !DOB_YEARS.contains(&dob.year()) {
        return Err(invalid());
    }
    Ok(dob)
}

pub fn format_dob(dob: Date) -> String {
    // a date always carries day, month and year, which is all the format asks for
    dob.format(DOB_FORMAT).unwrap_or_else(|_| dob.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_validate_name() {
        assert!(validate_name(""));
        assert!(validate_name("A"));
        assert!(validate_name("Ann Lee"));
        assert!(validate_name("Ann "));
        assert!(!validate_name("1A"));
        assert!(!validate_name(" Ann"));
        assert!(!validate_name("Ann3"));
        assert!(!validate_name("O'Neil"));
    }

    #[test]
    fn test_validate_contact() {
        assert!(validate_contact(""));
        assert!(validate_contact("9"));
        assert!(validate_contact("9876543210"));
        assert!(!validate_contact("98765432101"));
        assert!(!validate_contact("98765-4321"));
        assert!(!validate_contact("+91"));
    }

    #[test]
    fn test_validate_roll_no() {
        assert!(validate_roll_no(""));
        assert!(validate_roll_no("0042"));
        assert!(!validate_roll_no("42a"));
        assert!(!validate_roll_no("-1"));
        assert!(!validate_roll_no("٤٢"));
    }

    #[test]
    fn test_validate_email() {
        assert!(!validate_email("a@b.c"));
        assert!(validate_email("a@b.co"));
        assert!(validate_email("first.last+tag@mail.example.org"));
        assert!(!validate_email(""));
        assert!(!validate_email("no-at-sign.com"));
        assert!(!validate_email("a@b.c0"));
        assert!(!validate_email("a b@c.com"));
    }

    #[test]
    fn test_parse_dob() {
        assert_eq!(parse_dob("07-03-2004"), Ok(date!(2004 - 03 - 07)));
        assert_eq!(parse_dob("29-02-2024"), Ok(date!(2024 - 02 - 29)));
        assert_eq!(
            parse_dob("29-02-2023"),
            Err(ValidationError::InvalidDate("29-02-2023".to_string()))
        );
        assert!(parse_dob("2004-03-07").is_err());
        assert!(parse_dob("").is_err());
    }

    #[test]
    fn test_parse_dob_rejects_signed_years() {
        assert!(parse_dob("07-03--0001").is_err());
        assert!(parse_dob("07-03--2004").is_err());
    }

    #[test]
    fn test_dob_format_then_parse() {
        for dob in [
            date!(2004 - 03 - 07),
            date!(0001 - 01 - 01),
            date!(0000 - 12 - 31),
            date!(9999 - 12 - 31),
        ] {
            assert_eq!(parse_dob(&format_dob(dob)), Ok(dob));
        }
        let dob = parse_dob("01-01-0999").unwrap();
        assert_eq!(format_dob(dob), "01-01-0999");
    }

    #[test]
    fn test_format_dob() {
        assert_eq!(format_dob(date!(2004 - 03 - 07)), "07-03-2004");
        assert_eq!(format_dob(date!(1999 - 12 - 31)), "31-12-1999");
    }
}
