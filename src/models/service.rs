use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Minimum bookable duration for a catalog entry.
pub const MIN_SERVICE_DURATION_MINUTES: i64 = 5;

/// A catalog entry: something the salon sells. Not consulted by the
/// availability resolver; the duration feeds the booking flow upstream.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration_minutes: i64,
    pub requires_deposit: bool,
    pub deposit_amount: f64,
    pub points_earned: i64,
    pub image: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Service {
    pub fn new(request: CreateServiceRequest) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            description: request.description.unwrap_or_default(),
            price: request.price,
            duration_minutes: request.duration_minutes,
            requires_deposit: request.requires_deposit,
            deposit_amount: request.deposit_amount.unwrap_or(0.0),
            points_earned: request.points_earned,
            image: request.image,
            is_active: true,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Human-readable duration, e.g. "45min", "1h", "1h 30min".
    pub fn duration_display(&self) -> String {
        let hours = self.duration_minutes / 60;
        let minutes = self.duration_minutes % 60;
        match (hours, minutes) {
            (0, m) => format!("{}min", m),
            (h, 0) => format!("{}h", h),
            (h, m) => format!("{}h {}min", h, m),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub duration_minutes: i64,
    pub requires_deposit: bool,
    pub deposit_amount: Option<f64>,
    pub points_earned: i64,
    pub image: Option<String>,
}

impl CreateServiceRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name", "name cannot be empty"));
        }
        if self.price < 0.0 {
            return Err(ValidationError::new("price", "price cannot be negative"));
        }
        if self.duration_minutes < MIN_SERVICE_DURATION_MINUTES {
            return Err(ValidationError::new(
                "duration_minutes",
                format!(
                    "duration must be at least {} minutes",
                    MIN_SERVICE_DURATION_MINUTES
                ),
            ));
        }
        if self.points_earned < 0 {
            return Err(ValidationError::new(
                "points_earned",
                "points_earned cannot be negative",
            ));
        }
        Ok(())
    }
}
