//! Parsing of console input into task fields

use chrono::NaiveDate;

use super::error::{Result, TodoError};

/// Input format for due dates, e.g. `2024 01 05`
pub const DUE_DATE_FORMAT: &str = "%Y %m %d";

/// Parse a due date typed as `YYYY MM DD`.
///
/// Runs of whitespace between the fields are accepted.
pub fn parse_due_date(input: &str) -> Result<NaiveDate> {
    let fields: Vec<&str> = input.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(TodoError::InvalidDate(input.trim().to_string()));
    }

    NaiveDate::parse_from_str(&fields.join(" "), DUE_DATE_FORMAT)
        .map_err(|_| TodoError::InvalidDate(input.trim().to_string()))
}

/// Trim a description and reject the empty string, which is reserved for
/// the deletion marker.
pub fn parse_description(input: &str) -> Result<String> {
    let description = input.trim();
    if description.is_empty() {
        return Err(TodoError::EmptyDescription);
    }
    Ok(description.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_due_date() {
        assert_eq!(
            parse_due_date("2024 01 05"),
            Ok(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
        );
        assert_eq!(
            parse_due_date("  2024   1 5 \n"),
            Ok(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
        );
    }

    #[test]
    fn test_parse_due_date_rejects_bad_input() {
        for input in ["", "2024", "2024-01-05", "2024 13 01", "2024 02 30", "yyyy mm dd", "2024 01 05 09"] {
            assert!(
                matches!(parse_due_date(input), Err(TodoError::InvalidDate(_))),
                "expected {:?} to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_invalid_date_message() {
        let err = parse_due_date("tomorrow").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date format: 'tomorrow' (expected YYYY MM DD)"
        );
    }

    #[test]
    fn test_parse_description() {
        assert_eq!(parse_description("  Buy milk \n"), Ok("Buy milk".to_string()));
        assert_eq!(parse_description("   "), Err(TodoError::EmptyDescription));
    }
}
