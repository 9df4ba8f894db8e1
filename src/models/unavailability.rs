use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::models::time_range::TimeRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UnavailabilityReason {
    Vacation,
    SickLeave,
    Personal,
    Training,
    Other,
}

impl UnavailabilityReason {
    /// Human-readable label for display surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            UnavailabilityReason::Vacation => "Vacation",
            UnavailabilityReason::SickLeave => "Sick leave",
            UnavailabilityReason::Personal => "Personal",
            UnavailabilityReason::Training => "Training",
            UnavailabilityReason::Other => "Other",
        }
    }
}

impl std::fmt::Display for UnavailabilityReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnavailabilityReason::Vacation => write!(f, "vacation"),
            UnavailabilityReason::SickLeave => write!(f, "sick_leave"),
            UnavailabilityReason::Personal => write!(f, "personal"),
            UnavailabilityReason::Training => write!(f, "training"),
            UnavailabilityReason::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for UnavailabilityReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vacation" => Ok(UnavailabilityReason::Vacation),
            "sick_leave" => Ok(UnavailabilityReason::SickLeave),
            "personal" => Ok(UnavailabilityReason::Personal),
            "training" => Ok(UnavailabilityReason::Training),
            "other" => Ok(UnavailabilityReason::Other),
            _ => Err(format!("Invalid unavailability reason: {}", s)),
        }
    }
}

/// A blackout for a professional: full days over `[start_date, end_date]`
/// when either time bound is absent, otherwise the `[start_time, end_time)`
/// sub-window of each covered date.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProfessionalUnavailability {
    pub id: String,
    pub professional_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub reason: UnavailabilityReason,
    pub notes: String,
    pub created_at: String,
}

impl ProfessionalUnavailability {
    pub fn new(request: CreateUnavailabilityRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            professional_id: request.professional_id,
            start_date: request.start_date,
            end_date: request.end_date,
            start_time: request.start_time,
            end_time: request.end_time,
            reason: request.reason,
            notes: request.notes.unwrap_or_default(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// A record blocks whole days unless both time bounds are present.
    pub fn is_full_day(&self) -> bool {
        self.start_time.is_none() || self.end_time.is_none()
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// The blocked sub-window for any covered date, or `None` for a
    /// full-day record (the whole date is blocked). Partial records
    /// spanning several days block the same sub-window on every covered
    /// date.
    pub fn blocked_window(&self) -> Option<TimeRange> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(TimeRange::new(start, end)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUnavailabilityRequest {
    pub professional_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub reason: UnavailabilityReason,
    pub notes: Option<String>,
}

impl CreateUnavailabilityRequest {
    /// Shared write-time validation. Time ordering is only enforced for
    /// same-day records; date-spanning partial records are accepted and
    /// block the same sub-window on every covered date.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.end_date < self.start_date {
            return Err(ValidationError::new(
                "end_date",
                "end_date cannot be before start_date",
            ));
        }
        if self.start_date == self.end_date {
            if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
                if end <= start {
                    return Err(ValidationError::new(
                        "end_time",
                        "end_time must be after start_time",
                    ));
                }
            }
        }
        Ok(())
    }
}
