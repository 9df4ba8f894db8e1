use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Day of the week, Monday first. Stored as an integer column (0 = Monday,
/// 6 = Sunday).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Monday through Friday, the range seeded by the default schedule.
    pub const MONDAY_TO_FRIDAY: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn index(self) -> i32 {
        self as i32
    }

    /// Calendar lookups fed from raw integers fail closed: anything outside
    /// 0..=6 resolves to `None`, never an error.
    pub fn from_index(index: i64) -> Option<Weekday> {
        match index {
            0 => Some(Weekday::Monday),
            1 => Some(Weekday::Tuesday),
            2 => Some(Weekday::Wednesday),
            3 => Some(Weekday::Thursday),
            4 => Some(Weekday::Friday),
            5 => Some(Weekday::Saturday),
            6 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    pub fn from_date(date: NaiveDate) -> Weekday {
        // num_days_from_monday is always 0..=6
        Weekday::from_index(i64::from(date.weekday().num_days_from_monday()))
            .expect("chrono weekday out of range")
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Weekday::Monday => write!(f, "monday"),
            Weekday::Tuesday => write!(f, "tuesday"),
            Weekday::Wednesday => write!(f, "wednesday"),
            Weekday::Thursday => write!(f, "thursday"),
            Weekday::Friday => write!(f, "friday"),
            Weekday::Saturday => write!(f, "saturday"),
            Weekday::Sunday => write!(f, "sunday"),
        }
    }
}

impl std::str::FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            "saturday" => Ok(Weekday::Saturday),
            "sunday" => Ok(Weekday::Sunday),
            _ => Err(format!("Invalid weekday: {}", s)),
        }
    }
}

/// Half-open daily time interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// True when `other` lies entirely inside this range. A range contains
    /// itself.
    pub fn contains(&self, other: &TimeRange) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    pub fn contains_time(&self, time: NaiveTime) -> bool {
        time >= self.start && time < self.end
    }

    /// Half-open overlap: touching ranges ([09:00,10:00) and [10:00,11:00))
    /// do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn intersect(&self, other: &TimeRange) -> Option<TimeRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start < end {
            Some(TimeRange::new(start, end))
        } else {
            None
        }
    }

    /// Remove every blocking interval from this range, returning the
    /// surviving gaps in ascending order. A single block can split the
    /// range in two; blocks covering the whole range leave nothing.
    pub fn subtract_all(&self, blocks: &[TimeRange]) -> Vec<TimeRange> {
        let mut cuts: Vec<TimeRange> = blocks
            .iter()
            .filter(|block| self.overlaps(block))
            .copied()
            .collect();
        cuts.sort_by_key(|block| block.start);

        let mut free = Vec::new();
        let mut cursor = self.start;
        for cut in cuts {
            if cut.start > cursor {
                free.push(TimeRange::new(cursor, cut.start));
            }
            if cut.end > cursor {
                cursor = cut.end;
            }
            if cursor >= self.end {
                return free;
            }
        }
        if cursor < self.end {
            free.push(TimeRange::new(cursor, self.end));
        }
        free
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
