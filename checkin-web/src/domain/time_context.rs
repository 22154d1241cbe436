//! Time-derived values shown on a check-in page.
//!
//! Everything here is a pure function of the timestamp handed in. The caller
//! decides what "now" is (see [`crate::clock::Clock`]).

use serde::Serialize;
use time::{error::Format, macros::format_description, OffsetDateTime};

use super::PROMPTS;

/// Coarse bucket of the local hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "lowercase")]
pub enum TimeOfDay {
    Early,
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Buckets are inclusive-lower, exclusive-upper: [0,6) [6,12) [12,18) [18,24).
    pub fn from_hour(hour: u8) -> Self {
        match hour {
            0..=5 => Self::Early,
            6..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    /// Phrase used in "Here's to ..." on the page.
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Early => "a gentle early start",
            Self::Morning => "a bright morning",
            Self::Afternoon => "a grounded afternoon",
            Self::Evening => "a soft evening",
        }
    }
}

/// Values derived once when a page is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeContext {
    pub day_name: String,
    pub time_of_day: TimeOfDay,
    pub clock_time: String,
    pub prompt_index: usize,
}

impl TimeContext {
    pub fn suggestion(&self) -> &'static str {
        super::suggestion(self.prompt_index)
    }
}

pub fn derive_time_context(now: OffsetDateTime) -> Result<TimeContext, Format> {
    let weekday = now.weekday();

    Ok(TimeContext {
        day_name: weekday.to_string(),
        time_of_day: TimeOfDay::from_hour(now.hour()),
        clock_time: format_clock_time(now)?,
        prompt_index: weekday.number_days_from_sunday() as usize % PROMPTS.len(),
    })
}

/// English 12-hour clock, e.g. "9:05 AM" or "12:30 PM".
pub fn format_clock_time(now: OffsetDateTime) -> Result<String, Format> {
    now.format(format_description!(
        "[hour repr:12 padding:none]:[minute] [period case:upper]"
    ))
}
