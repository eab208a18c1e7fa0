use serde::Serialize;
use serde::ser::SerializeMap;

use crate::consts::{DAYS_IN_COMMON_YEAR, MONTHS_IN_YEAR};
use crate::{Month, Named, ParseError, Year, prelude::*};

/// Month-name to day-count mapping for a single year.
///
/// February is the only entry that depends on the year; every other month
/// holds its fixed calendar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "days in {year}")]
pub struct DayTable {
    year: Year,
    days: [u8; MONTHS_IN_YEAR],
}

/// Error type for operations over month-like inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonthsError {
    /// The input does not name a month in the lookup table.
    #[error("Invalid argument: {name:?} is not a month name")]
    InvalidArgument { name: String },

    /// Error parsing a calendar component.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl DayTable {
    /// Builds the table for `year`.
    pub fn for_year(year: Year) -> Self {
        Self {
            year,
            days: Month::ALL.map(|month| month.days_in(year)),
        }
    }

    /// Builds the table for the current year. Recomputed on every call, so a
    /// long-lived process picks up the new February at the turn of the year.
    pub fn current() -> Self {
        Self::for_year(Year::current())
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    /// Day count for a typed month
    pub const fn days(&self, month: Month) -> u8 {
        self.days[month as usize - 1]
    }

    /// Day count for an exact month name, `None` if the name is not a key
    pub fn get(&self, name: &str) -> Option<u8> {
        name.parse::<Month>().ok().map(|month| self.days(month))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Reports whether a month-like value names an entry of this table
    pub fn is_valid<M: Named + ?Sized>(&self, month: &M) -> bool {
        self.contains(month.name())
    }

    /// Mean day count of three month-like values.
    ///
    /// # Errors
    /// Returns `MonthsError::InvalidArgument` for the first input whose name
    /// is not a key of the table.
    pub fn average<A, B, C>(&self, first: &A, second: &B, third: &C) -> Result<f64, MonthsError>
    where
        A: Named + ?Sized,
        B: Named + ?Sized,
        C: Named + ?Sized,
    {
        let total = u16::from(self.lookup(first.name())?)
            + u16::from(self.lookup(second.name())?)
            + u16::from(self.lookup(third.name())?);
        Ok(f64::from(total) / 3.0)
    }

    fn lookup(&self, name: &str) -> Result<u8, MonthsError> {
        self.get(name).ok_or_else(|| MonthsError::InvalidArgument {
            name: name.to_owned(),
        })
    }

    /// Iterates `(name, days)` pairs in calendar order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        Month::ALL
            .iter()
            .map(|month| (month.as_str(), self.days(*month)))
    }

    pub const fn len(&self) -> usize {
        MONTHS_IN_YEAR
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    /// 365 or 366
    pub fn total_days(&self) -> u16 {
        if self.year.is_leap() {
            DAYS_IN_COMMON_YEAR + 1
        } else {
            DAYS_IN_COMMON_YEAR
        }
    }
}

impl Serialize for DayTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, days) in self.iter() {
            map.serialize_entry(name, &days)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MONTH_NAMES;
    use crate::test_utils::{table, year};

    #[test]
    fn test_february_by_year() {
        struct TestCase {
            year:        u16,
            february:    u8,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                february:    29,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                february:    28,
                description: "not divisible by 4",
            },
            TestCase {
                year:        2000,
                february:    29,
                description: "divisible by 400",
            },
            TestCase {
                year:        1900,
                february:    28,
                description: "divisible by 100, not 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                table(case.year).get("February"),
                Some(case.february),
                "February {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_fixed_months_ignore_year() {
        let expected = [
            ("January", 31),
            ("March", 31),
            ("April", 30),
            ("May", 31),
            ("June", 30),
            ("July", 31),
            ("August", 31),
            ("September", 30),
            ("October", 31),
            ("November", 30),
            ("December", 31),
        ];

        for y in [1900, 2000, 2023, 2024] {
            let days = table(y);
            for (name, count) in expected {
                assert_eq!(days.get(name), Some(count), "{name} in {y}");
            }
        }
    }

    #[test]
    fn test_current_table_follows_leap_rule() {
        let days = DayTable::current();
        let expected = if days.year().is_leap() { 29 } else { 28 };
        assert_eq!(days.get("February"), Some(expected));
        assert_eq!(days.days(Month::February), expected);
    }

    #[test]
    fn test_keys_are_the_twelve_names() {
        let days = table(2023);
        let names: Vec<&str> = days.iter().map(|(name, _)| name).collect();
        assert_eq!(names, MONTH_NAMES);
        assert_eq!(days.len(), 12);
        assert!(!days.is_empty());
    }

    #[test]
    fn test_is_valid() {
        let days = table(2023);
        for name in MONTH_NAMES {
            assert!(days.is_valid(name), "{name} should be valid");
        }
        assert!(days.is_valid(&Month::December));
        assert!(days.is_valid("December"));
        assert!(!days.is_valid("Smarch"));
        assert!(!days.is_valid(""));
        assert!(!days.is_valid("january"));
        assert!(!days.is_valid("Janvier"));
        assert!(!days.is_valid("Febuary"));
    }

    #[test]
    fn test_total_days() {
        assert_eq!(table(2023).total_days(), 365);
        assert_eq!(table(2024).total_days(), 366);
        assert_eq!(
            table(2024).iter().map(|(_, d)| u16::from(d)).sum::<u16>(),
            table(2024).total_days()
        );
    }

    #[test]
    fn test_average() {
        let common = table(2023);
        let avg = common
            .average("January", "February", "March")
            .expect("all three names are valid");
        assert!((avg - 30.0).abs() < f64::EPSILON);

        let leap = table(2024);
        let avg = leap
            .average(&Month::January, &Month::February, &Month::March)
            .expect("all three months are valid");
        assert!((avg - 91.0 / 3.0).abs() < 1e-12);

        let avg = leap
            .average("April", "June", "September")
            .expect("all three names are valid");
        assert!((avg - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_rejects_unknown_names() {
        let days = table(2023);
        let err = days
            .average("January", "Smarch", "March")
            .expect_err("Smarch is not a month");
        assert_eq!(
            err,
            MonthsError::InvalidArgument {
                name: "Smarch".to_owned()
            }
        );
        assert!(err.to_string().contains("Smarch"));

        let err = days
            .average("", "February", "March")
            .expect_err("empty name is not a month");
        assert!(matches!(err, MonthsError::InvalidArgument { name } if name.is_empty()));
    }

    #[test]
    fn test_display() {
        assert_eq!(table(2024).to_string(), "days in 2024");
        assert_eq!(table(2024).year(), year(2024));
    }

    #[test]
    fn test_serialize_as_map() {
        let json = serde_json::to_value(table(2024)).expect("failed to serialize table");
        assert_eq!(json["January"], 31);
        assert_eq!(json["February"], 29);
        assert_eq!(json["December"], 31);
        assert_eq!(json.as_object().map(serde_json::Map::len), Some(12));
    }

    #[test]
    fn test_parse_error_converts() {
        let err: MonthsError = ParseError::InvalidYear(0).into();
        assert!(err.to_string().contains("Invalid year"));
    }
}
