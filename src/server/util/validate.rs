//! Field validation used when request DTOs are turned into parameter structs.
//!
//! Every function returns the normalized value (trimmed, uppercased, digits only...)
//! or an `AppError::BadRequest` with a message meant for the API client.

use chrono::{Datelike, NaiveDate};

use crate::server::error::AppError;

const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_=+[]{}|;:'\"<>,.?/~`";

/// Trims `value` and checks its length in characters.
pub fn text(field: &str, value: String, min: usize, max: usize) -> Result<String, AppError> {
    let value = value.trim().to_string();
    let len = value.chars().count();

    if len < min || len > max {
        return Err(AppError::BadRequest(format!(
            "{} must be between {} and {} characters long.",
            field, min, max
        )));
    }

    Ok(value)
}

/// Trims an optional value and checks its maximum length. Blank values become `None`.
pub fn optional_text(
    field: &str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, AppError> {
    let Some(value) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    if value.chars().count() > max {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters long.",
            field, max
        )));
    }

    Ok(Some(value))
}

/// Checks that a range does not end before it starts.
pub fn date_range<T: PartialOrd>(start: &T, end: &T) -> Result<(), AppError> {
    if start > end {
        return Err(AppError::BadRequest(
            "Start date must be before or equal to end date.".to_string(),
        ));
    }

    Ok(())
}

/// Checks that `value` lies in `min..=max`.
pub fn range(field: &str, value: i32, min: i32, max: i32) -> Result<i32, AppError> {
    if value < min || value > max {
        return Err(AppError::BadRequest(format!(
            "{} must be between {} and {}.",
            field, min, max
        )));
    }

    Ok(value)
}

/// Strips every non-digit character and checks for a ten digit mobile number starting with 3.
pub fn telephone(value: &str) -> Result<String, AppError> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();

    if digits.len() != 10 || !digits.starts_with('3') {
        return Err(AppError::BadRequest(
            "Telephone must be a 10 digit number starting with 3.".to_string(),
        ));
    }

    Ok(digits)
}

/// Checks password strength.
///
/// A password has no surrounding spaces, at least 8 characters and at least one
/// lowercase letter, uppercase letter, digit and special character.
pub fn password(value: &str) -> Result<String, AppError> {
    let rule = |ok: bool, message: &str| {
        if ok {
            Ok(())
        } else {
            Err(AppError::BadRequest(message.to_string()))
        }
    };

    rule(
        value.trim() == value,
        "Password cannot start or end with spaces.",
    )?;
    rule(
        value.chars().count() >= 8,
        "Password must be at least 8 characters long.",
    )?;
    rule(
        value.chars().any(char::is_lowercase),
        "Password must contain at least one lowercase letter.",
    )?;
    rule(
        value.chars().any(char::is_uppercase),
        "Password must contain at least one uppercase letter.",
    )?;
    rule(
        value.chars().any(|c| c.is_ascii_digit()),
        "Password must contain at least one digit.",
    )?;
    rule(
        value.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        "Password must contain at least one special character.",
    )?;

    Ok(value.to_string())
}

/// Checks a username: 3 to 50 characters out of letters, digits, `_` and `-`.
pub fn username(value: String) -> Result<String, AppError> {
    let value = text("Username", value, 3, 50)?;

    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AppError::BadRequest(
            "Username can only contain letters, numbers, underscores and hyphens.".to_string(),
        ));
    }

    Ok(value)
}

/// Lowercases an e-mail address and checks its general shape.
pub fn email(value: &str) -> Result<String, AppError> {
    let value = value.trim().to_lowercase();
    let invalid = || AppError::BadRequest(format!("{} is not a valid email address.", value));

    let Some((local, domain)) = value.split_once('@') else {
        return Err(invalid());
    };

    let labels_ok = domain.split('.').all(|label| !label.is_empty());
    if local.is_empty() || domain.contains('@') || !domain.contains('.') || !labels_ok {
        return Err(invalid());
    }

    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    Ok(value)
}

/// Checks that a birthdate is not in the future and belongs to an adult.
///
/// # Arguments
/// - `value` - Birthdate to validate
/// - `today` - Reference date, the current date outside of tests
pub fn birthdate(value: NaiveDate, today: NaiveDate) -> Result<NaiveDate, AppError> {
    if value > today {
        return Err(AppError::BadRequest(
            "Birthdate cannot be in the future.".to_string(),
        ));
    }

    let mut age = today.year() - value.year();
    if (today.month(), today.day()) < (value.month(), value.day()) {
        age -= 1;
    }

    if age < 18 {
        return Err(AppError::BadRequest(
            "Member must be at least 18 years old.".to_string(),
        ));
    }

    Ok(value)
}

/// Uppercases a license plate and checks the `AAA000` format.
pub fn license_plate(value: &str) -> Result<String, AppError> {
    let value = value.trim().to_uppercase();
    let valid = value.len() == 6 && value.is_ascii() && {
        let (letters, digits) = value.split_at(3);
        letters.chars().all(|c| c.is_ascii_uppercase())
            && digits.chars().all(|c| c.is_ascii_digit())
    };

    if !valid {
        return Err(AppError::BadRequest(
            "License plate must have the format AAA000.".to_string(),
        ));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn text_is_trimmed_and_bounded() {
        assert_eq!(text("Name", "  Ride  ".to_string(), 3, 50).unwrap(), "Ride");
        assert!(text("Name", "ab".to_string(), 3, 50).is_err());
        assert!(text("Name", "x".repeat(51), 3, 50).is_err());
        // Length counts characters, not bytes
        assert!(text("Name", "ñññ".to_string(), 3, 3).is_ok());
    }

    #[test]
    fn blank_optional_text_becomes_none() {
        assert_eq!(optional_text("Description", Some("   ".to_string()), 10).unwrap(), None);
        assert!(optional_text("Description", Some("x".repeat(11)), 10).is_err());
    }

    #[test]
    fn rejects_inverted_date_range() {
        assert!(date_range(&date(2023, 1, 1), &date(2025, 12, 31)).is_ok());
        assert!(date_range(&date(2023, 1, 1), &date(2023, 1, 1)).is_ok());

        let err = date_range(&date(2025, 1, 1), &date(2023, 1, 1)).unwrap_err();
        assert_eq!(err.to_string(), "Start date must be before or equal to end date.");
    }

    #[test]
    fn normalizes_telephone() {
        assert_eq!(telephone("(300) 123-4567").unwrap(), "3001234567");
        assert!(telephone("6041234567").is_err());
        assert!(telephone("300123456").is_err());
    }

    #[test]
    fn enforces_password_rules() {
        assert!(password("Sup3r$ecret").is_ok());
        assert!(password(" Sup3r$ecret").is_err());
        assert!(password("Sh0r$t").is_err());
        assert!(password("sup3r$ecret").is_err());
        assert!(password("SUP3R$ECRET").is_err());
        assert!(password("Super$ecret").is_err());
        assert!(password("Sup3rSecret").is_err());
    }

    #[test]
    fn checks_username_characters() {
        assert!(username("night_rider-01".to_string()).is_ok());
        assert!(username("night rider".to_string()).is_err());
    }

    #[test]
    fn checks_email_shape() {
        assert_eq!(email(" Rider@MotoClub.co ").unwrap(), "rider@motoclub.co");
        assert!(email("rider").is_err());
        assert!(email("@motoclub.co").is_err());
        assert!(email("rider@motoclub").is_err());
        assert!(email("rider@@motoclub.co").is_err());
    }

    #[test]
    fn requires_adult_birthdate() {
        let today = date(2026, 3, 10);

        assert!(birthdate(date(2008, 3, 10), today).is_ok());
        assert!(birthdate(date(2008, 3, 11), today).is_err());
        assert!(birthdate(date(2027, 1, 1), today).is_err());
    }

    #[test]
    fn uppercases_license_plate() {
        assert_eq!(license_plate("abc123").unwrap(), "ABC123");
        assert!(license_plate("AB1234").is_err());
        assert!(license_plate("ABCD12").is_err());
        assert!(license_plate("ñbc123").is_err());
    }
}
