//! The time of day the first block starts at.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A day start on a 15-minute grid, written `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayStart {
    hour: u32,
    minute: u32,
}

impl Default for DayStart {
    fn default() -> Self {
        DayStart { hour: 8, minute: 0 }
    }
}

impl DayStart {
    pub fn new(hour: u32, minute: u32) -> Result<Self, String> {
        if hour > 23 {
            return Err(format!("Invalid hour {}. Expected 0-23", hour));
        }
        if minute % 15 != 0 || minute > 45 {
            return Err(format!(
                "Invalid minute {}. The day starts on a quarter hour (00, 15, 30 or 45)",
                minute
            ));
        }
        Ok(DayStart { hour, minute })
    }

    /// The anchor instant for `date`.
    pub fn on(self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.time())
    }

    /// The anchor instant for today in the local calendar.
    pub fn today(self) -> NaiveDateTime {
        self.on(Local::now().date_naive())
    }

    pub fn time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl FromStr for DayStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid day start '{}'. Expected HH:MM, e.g. 08:30", s);

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour = hour.parse::<u32>().map_err(|_| invalid())?;
        let minute = minute.parse::<u32>().map_err(|_| invalid())?;

        DayStart::new(hour, minute)
    }
}

impl TryFrom<String> for DayStart {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayStart> for String {
    fn from(value: DayStart) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DayStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quarter_hours() {
        assert_eq!("08:00".parse::<DayStart>().unwrap(), DayStart::new(8, 0).unwrap());
        assert_eq!("9:45".parse::<DayStart>().unwrap(), DayStart::new(9, 45).unwrap());
        assert_eq!(" 12:15 ".parse::<DayStart>().unwrap().to_string(), "12:15");
    }

    #[test]
    fn rejects_off_grid_and_garbage() {
        assert!("08:10".parse::<DayStart>().is_err());
        assert!("08:60".parse::<DayStart>().is_err());
        assert!("24:00".parse::<DayStart>().is_err());
        assert!("eight".parse::<DayStart>().is_err());
        assert!("0800".parse::<DayStart>().is_err());
    }

    #[test]
    fn anchors_on_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        let anchor = DayStart::new(6, 30).unwrap().on(date);
        assert_eq!(anchor, date.and_hms_opt(6, 30, 0).unwrap());
    }

    #[test]
    fn default_is_eight_o_clock() {
        assert_eq!(DayStart::default().to_string(), "08:00");
    }
}
