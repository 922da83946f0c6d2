//! Day-first date patterns such as `dd/MM/yyyy`.
//!
//! Patterns are written with repeated letters and translated once into a
//! `chrono` format string. Supported fields:
//!
//! | Letters | Meaning | chrono |
//! |---------|---------|--------|
//! | `dd` | day of month, zero padded | `%d` |
//! | `MM` | month, zero padded | `%m` |
//! | `yyyy` | four-digit year | `%Y` |
//! | `yy` | two-digit year | `%y` |
//! | `HH` | hour 00-23 | `%H` |
//! | `hh` | hour 01-12 | `%I` |
//! | `mm` | minute | `%M` |
//! | `ss` | second | `%S` |
//!
//! Anything that is not a letter is copied through literally.

use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{CalendarError, Result};

/// Pattern used when none is configured.
pub const DEFAULT_DATE_PATTERN: &str = "dd/MM/yyyy";

/// A parsed date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    chrono_format: String,
    has_time_fields: bool,
}

impl DatePattern {
    pub fn parse(pattern: &str) -> Result<Self> {
        let unsupported = |reason: String| CalendarError::UnsupportedPattern {
            pattern: pattern.to_string(),
            reason,
        };

        if pattern.is_empty() {
            return Err(unsupported("pattern is empty".to_string()));
        }

        let mut chrono_format = String::with_capacity(pattern.len() * 2);
        let mut has_time_fields = false;
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if !c.is_ascii_alphabetic() {
                if c == '%' {
                    chrono_format.push_str("%%");
                } else {
                    chrono_format.push(c);
                }
                continue;
            }

            let mut run = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                run += 1;
            }

            let spec = match (c, run) {
                ('d', 2) => "%d",
                ('M', 2) => "%m",
                ('y', 4) => "%Y",
                ('y', 2) => "%y",
                ('H', 2) => "%H",
                ('h', 2) => "%I",
                ('m', 2) => "%M",
                ('s', 2) => "%S",
                _ => {
                    return Err(unsupported(format!(
                        "field '{}' is not supported",
                        c.to_string().repeat(run)
                    )));
                }
            };
            has_time_fields |= matches!(c, 'H' | 'h' | 'm' | 's');
            chrono_format.push_str(spec);
        }

        Ok(Self {
            source: pattern.to_string(),
            chrono_format,
            has_time_fields,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True if the pattern needs a time of day to render.
    pub fn has_time_fields(&self) -> bool {
        self.has_time_fields
    }

    /// Renders a date. Fails if the pattern contains time fields.
    pub fn format_date(&self, date: NaiveDate) -> Result<String> {
        if self.has_time_fields {
            return Err(CalendarError::UnsupportedPattern {
                pattern: self.source.clone(),
                reason: "pattern has time fields but only a date was given".to_string(),
            });
        }
        Ok(date.format(&self.chrono_format).to_string())
    }

    /// Renders a date and time.
    pub fn format_datetime(&self, datetime: NaiveDateTime) -> String {
        datetime.format(&self.chrono_format).to_string()
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        Self {
            source: DEFAULT_DATE_PATTERN.to_string(),
            chrono_format: "%d/%m/%Y".to_string(),
            has_time_fields: false,
        }
    }
}

impl FromStr for DatePattern {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// Parses `pattern` and renders `date` with it.
pub fn format_date(date: NaiveDate, pattern: &str) -> Result<String> {
    DatePattern::parse(pattern)?.format_date(date)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn cup() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 6, 5).unwrap()
    }

    #[test_case("dd/MM/yyyy" => "05/06/2022"; "day first")]
    #[test_case("yyyy-MM-dd" => "2022-06-05"; "iso")]
    #[test_case("dd.MM.yy" => "05.06.22"; "short year")]
    #[test_case("MM/dd 100%" => "06/05 100%"; "literal percent")]
    fn formats_dates(pattern: &str) -> String {
        format_date(cup(), pattern).unwrap()
    }

    #[test]
    fn default_matches_parsed_default() {
        assert_eq!(DatePattern::default(), DatePattern::parse(DEFAULT_DATE_PATTERN).unwrap());
    }

    #[test]
    fn formats_datetime_with_twelve_hour_clock() {
        let pattern: DatePattern = "dd/MM/yyyy hh:mm:ss".parse().unwrap();
        let at = cup().and_hms_opt(15, 4, 9).unwrap();

        assert!(pattern.has_time_fields());
        assert_eq!(pattern.format_datetime(at), "05/06/2022 03:04:09");
    }

    #[test]
    fn time_fields_need_a_time() {
        let err = format_date(cup(), "dd/MM/yyyy HH:mm").unwrap_err();
        assert!(matches!(err, CalendarError::UnsupportedPattern { .. }));
    }

    #[test_case("dd/MMM/yyyy"; "three letter month")]
    #[test_case("yyy"; "three letter year")]
    #[test_case("EEEE"; "day name")]
    #[test_case(""; "empty")]
    fn rejects_unsupported_patterns(pattern: &str) {
        assert!(DatePattern::parse(pattern).is_err());
    }
}
