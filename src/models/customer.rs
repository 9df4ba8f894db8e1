use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CustomerLevel {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl CustomerLevel {
    /// Level thresholds: 0-100 bronze, 101-500 silver, 501-1000 gold,
    /// 1001+ platinum.
    pub fn for_points(points: i64) -> CustomerLevel {
        if points >= 1001 {
            CustomerLevel::Platinum
        } else if points >= 501 {
            CustomerLevel::Gold
        } else if points >= 101 {
            CustomerLevel::Silver
        } else {
            CustomerLevel::Bronze
        }
    }
}

impl Default for CustomerLevel {
    fn default() -> Self {
        CustomerLevel::Bronze
    }
}

impl std::fmt::Display for CustomerLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomerLevel::Bronze => write!(f, "bronze"),
            CustomerLevel::Silver => write!(f, "silver"),
            CustomerLevel::Gold => write!(f, "gold"),
            CustomerLevel::Platinum => write!(f, "platinum"),
        }
    }
}

impl std::str::FromStr for CustomerLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bronze" => Ok(CustomerLevel::Bronze),
            "silver" => Ok(CustomerLevel::Silver),
            "gold" => Ok(CustomerLevel::Gold),
            "platinum" => Ok(CustomerLevel::Platinum),
            _ => Err(format!("Invalid customer level: {}", s)),
        }
    }
}

/// A customer account with its loyalty ledger. Points are granted and
/// spent by the booking flow upstream; this type keeps the balance,
/// lifetime counters and derived level consistent.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub points: i64,
    pub total_points_earned: i64,
    pub total_points_redeemed: i64,
    pub level: CustomerLevel,
    pub total_appointments: i64,
    pub completed_appointments: i64,
    pub cancelled_appointments: i64,
    pub no_show_count: i64,
    pub preferred_branch_id: Option<String>,
    pub preferred_professional_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Customer {
    pub fn new(request: CreateCustomerRequest) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email.to_lowercase(),
            phone: request.phone.unwrap_or_default(),
            points: 0,
            total_points_earned: 0,
            total_points_redeemed: 0,
            level: CustomerLevel::default(),
            total_appointments: 0,
            completed_appointments: 0,
            cancelled_appointments: 0,
            no_show_count: 0,
            preferred_branch_id: request.preferred_branch_id,
            preferred_professional_id: request.preferred_professional_id,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn update_level(&mut self) {
        self.level = CustomerLevel::for_points(self.points);
    }

    pub fn add_points(&mut self, points: i64) {
        self.points += points;
        self.total_points_earned += points;
        self.update_level();
    }

    /// Redeem from the balance; returns false (and leaves the account
    /// untouched) when the balance is insufficient.
    pub fn redeem_points(&mut self, points: i64) -> bool {
        if self.points < points {
            return false;
        }
        self.points -= points;
        self.total_points_redeemed += points;
        self.update_level();
        true
    }

    pub fn cancellation_rate(&self) -> f64 {
        if self.total_appointments == 0 {
            return 0.0;
        }
        (self.cancelled_appointments as f64 / self.total_appointments as f64) * 100.0
    }

    pub fn no_show_rate(&self) -> f64 {
        if self.total_appointments == 0 {
            return 0.0;
        }
        (self.no_show_count as f64 / self.total_appointments as f64) * 100.0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferred_branch_id: Option<String>,
    pub preferred_professional_id: Option<String>,
}

impl CreateCustomerRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(ValidationError::new(
                "first_name",
                "first_name cannot be empty",
            ));
        }
        if self.last_name.trim().is_empty() {
            return Err(ValidationError::new(
                "last_name",
                "last_name cannot be empty",
            ));
        }
        if !self.email.contains('@') {
            return Err(ValidationError::new("email", "email is not valid"));
        }
        Ok(())
    }
}
