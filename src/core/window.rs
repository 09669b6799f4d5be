use crate::domain::model::{SearchWindow, WIRE_DATE_FORMAT};
use crate::utils::error::{Result, ScoutError};
use chrono::{Duration, Local, NaiveDate};

/// Input date format for interactive start/end dates (date-picker style).
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// How the interactive path reacts to an unparseable date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Propagate `InvalidDateFormat`.
    Fail,
    /// Fall back to the default window and flag it, never error.
    DefaultWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltWindow {
    pub window: SearchWindow,
    /// True when the inputs failed to parse and the default window was used.
    pub fell_back: bool,
}

/// `[today - 30 days, today]`.
pub fn default_window() -> SearchWindow {
    let today = Local::now().date_naive();
    SearchWindow {
        from: today - Duration::days(30),
        to: today,
    }
}

/// Replay path: award date ± 15 days. The reference date must be
/// MM/DD/YYYY; a parse failure is fatal to the replay flow.
pub fn reference_window(reference: &str) -> Result<SearchWindow> {
    let date = NaiveDate::parse_from_str(reference, WIRE_DATE_FORMAT).map_err(|_| {
        ScoutError::InvalidDateFormat {
            value: reference.to_string(),
            expected: "MM/DD/YYYY",
        }
    })?;

    Ok(SearchWindow {
        from: date - Duration::days(15),
        to: date + Duration::days(15),
    })
}

/// Interactive path: explicit start/end in YYYY-MM-DD. A missing boundary
/// takes the matching default boundary. An unparseable boundary is handled
/// per `policy`: under `DefaultWindow` the whole window reverts to
/// `[today-30d, today]` and `fell_back` is set so the caller can warn.
pub fn range_window(
    start: Option<&str>,
    end: Option<&str>,
    policy: ParsePolicy,
) -> Result<BuiltWindow> {
    let defaults = default_window();

    let parsed_start = match start {
        Some(s) => parse_input_date(s),
        None => Ok(defaults.from),
    };
    let parsed_end = match end {
        Some(s) => parse_input_date(s),
        None => Ok(defaults.to),
    };

    match (parsed_start, parsed_end) {
        (Ok(from), Ok(to)) => Ok(BuiltWindow {
            window: SearchWindow { from, to },
            fell_back: false,
        }),
        (from, to) => match policy {
            ParsePolicy::Fail => {
                from?;
                to?;
                unreachable!("at least one side failed to parse")
            }
            ParsePolicy::DefaultWindow => Ok(BuiltWindow {
                window: defaults,
                fell_back: true,
            }),
        },
    }
}

fn parse_input_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, INPUT_DATE_FORMAT).map_err(|_| {
        ScoutError::InvalidDateFormat {
            value: value.to_string(),
            expected: "YYYY-MM-DD",
        }
    })
}
