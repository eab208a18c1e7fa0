mod consts;
mod prelude;
mod residence;
pub mod server;
mod table;
mod types;

pub use consts::*;
pub use residence::{Person, lives_here};
pub use table::{DayTable, MonthsError};
pub use types::{Month, Named, Year, is_leap_year};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Unknown month name: {_0:?}")]
    UnknownMonthName(String),
    #[display(fmt = "Empty month name")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Day count of every month in the current year.
///
/// February follows the Gregorian leap rule for the year read from the local
/// clock at call time; the table is rebuilt on every call.
pub fn days_in_month() -> DayTable {
    DayTable::current()
}

/// Whether a month-like value names an entry of [`days_in_month`].
///
/// Names are matched exactly, so `"january"`, `""` and `"Smarch"` are all
/// rejected.
pub fn is_valid<M: Named + ?Sized>(month: &M) -> bool {
    days_in_month().is_valid(month)
}

/// Mean day count of three months in the current year.
///
/// # Errors
/// Returns `MonthsError::InvalidArgument` if any input does not name a month.
pub fn average<A, B, C>(first: &A, second: &B, third: &C) -> Result<f64, MonthsError>
where
    A: Named + ?Sized,
    B: Named + ?Sized,
    C: Named + ?Sized,
{
    days_in_month().average(first, second, third)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month_uses_current_year() {
        let days = days_in_month();
        let y = Year::current();
        // Straddling midnight on 31 December would flip the year between reads.
        if days.year() == y {
            let february = if is_leap_year(y.get()) { 29 } else { 28 };
            assert_eq!(days.get("February"), Some(february));
        }
        assert_eq!(days.get("January"), Some(31));
        assert_eq!(days.get("April"), Some(30));
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("December"));
        assert!(is_valid(&Month::December));
        assert!(is_valid(&String::from("February")));
        assert!(!is_valid("Smarch"));
        assert!(!is_valid(""));
        assert!(!is_valid("january"));
    }

    #[test]
    fn test_every_key_is_valid() {
        for (name, _) in days_in_month().iter() {
            assert!(is_valid(name), "{name} should be valid");
        }
    }

    #[test]
    fn test_average_fixed_months() {
        let avg = average("April", "June", "November").expect("all three names are valid");
        assert!((avg - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_invalid_argument() {
        let result = average("April", "June", "Juno");
        assert!(matches!(
            result,
            Err(MonthsError::InvalidArgument { ref name }) if name == "Juno"
        ));
    }

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            ParseError::InvalidYear(0).to_string(),
            "Invalid year: 0 (must be 1-9999)"
        );
        assert_eq!(
            ParseError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            ParseError::UnknownMonthName("Smarch".to_owned()).to_string(),
            r#"Unknown month name: "Smarch""#
        );
    }
}
