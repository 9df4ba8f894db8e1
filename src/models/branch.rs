use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::models::time_range::{TimeRange, Weekday};

/// A physical salon location. Each branch has a single daily window
/// (`opening_time`..`closing_time`) shared by every open day; only the
/// open/closed flag varies per weekday.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub description: String,
    pub image: Option<String>,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    pub monday_open: bool,
    pub tuesday_open: bool,
    pub wednesday_open: bool,
    pub thursday_open: bool,
    pub friday_open: bool,
    pub saturday_open: bool,
    pub sunday_open: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub total_chairs: i64,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Branch {
    pub fn new(request: CreateBranchRequest) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            address: request.address.unwrap_or_default(),
            phone: request.phone.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            description: request.description.unwrap_or_default(),
            image: request.image,
            opening_time: request.opening_time,
            closing_time: request.closing_time,
            monday_open: request.monday_open,
            tuesday_open: request.tuesday_open,
            wednesday_open: request.wednesday_open,
            thursday_open: request.thursday_open,
            friday_open: request.friday_open,
            saturday_open: request.saturday_open,
            sunday_open: request.sunday_open,
            latitude: request.latitude,
            longitude: request.longitude,
            total_chairs: request.total_chairs.unwrap_or(1),
            is_active: true,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// The stored open flag for a weekday.
    pub fn is_open(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Monday => self.monday_open,
            Weekday::Tuesday => self.tuesday_open,
            Weekday::Wednesday => self.wednesday_open,
            Weekday::Thursday => self.thursday_open,
            Weekday::Friday => self.friday_open,
            Weekday::Saturday => self.saturday_open,
            Weekday::Sunday => self.sunday_open,
        }
    }

    /// Raw-integer variant for callers holding an unvalidated weekday
    /// index: anything outside 0..=6 reads as closed.
    pub fn is_open_on_index(&self, index: i64) -> bool {
        Weekday::from_index(index)
            .map(|weekday| self.is_open(weekday))
            .unwrap_or(false)
    }

    pub fn working_hours(&self) -> TimeRange {
        TimeRange::new(self.opening_time, self.closing_time)
    }

    /// The open days, Monday first.
    pub fn working_days(&self) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|weekday| self.is_open(*weekday))
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBranchRequest {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    pub monday_open: bool,
    pub tuesday_open: bool,
    pub wednesday_open: bool,
    pub thursday_open: bool,
    pub friday_open: bool,
    pub saturday_open: bool,
    pub sunday_open: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub total_chairs: Option<i64>,
}

impl CreateBranchRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name", "name cannot be empty"));
        }
        if self.opening_time >= self.closing_time {
            return Err(ValidationError::new(
                "closing_time",
                "closing_time must be after opening_time",
            ));
        }
        Ok(())
    }
}
