use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// A staff member who performs services at one or more branches. Branch and
/// service assignments live in join tables; the aggregate statistics are
/// maintained by the surrounding layer and stored opaquely here.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Professional {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub specialties: String,
    pub experience_years: i64,
    pub profile_picture: Option<String>,
    pub total_appointments: i64,
    pub completed_appointments: i64,
    pub average_rating: f64,
    pub total_reviews: i64,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Professional {
    pub fn new(request: CreateProfessionalRequest) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email.to_lowercase(),
            phone: request.phone.unwrap_or_default(),
            bio: request.bio.unwrap_or_default(),
            specialties: request.specialties.unwrap_or_default(),
            experience_years: request.experience_years.unwrap_or(0),
            profile_picture: request.profile_picture,
            total_appointments: 0,
            completed_appointments: 0,
            average_rating: 0.0,
            total_reviews: 0,
            is_active: true,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfessionalRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub specialties: Option<String>,
    pub experience_years: Option<i64>,
    pub profile_picture: Option<String>,
    /// Initial branch assignments.
    pub branch_ids: Vec<String>,
    /// Initial service assignments.
    pub service_ids: Vec<String>,
}

impl CreateProfessionalRequest {
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
