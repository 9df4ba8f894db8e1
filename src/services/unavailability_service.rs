use chrono::NaiveDate;

use crate::{
    database::Database,
    errors::{DomainError, DomainResult},
    models::{CreateUnavailabilityRequest, ProfessionalUnavailability},
};

/// Service for the blackout ledger.
#[derive(Clone)]
pub struct UnavailabilityService {
    db: Database,
}

impl UnavailabilityService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Validate and persist a blackout record.
    pub async fn create_unavailability(
        &self,
        request: CreateUnavailabilityRequest,
    ) -> DomainResult<ProfessionalUnavailability> {
        let professional = self
            .db
            .get_professional(&request.professional_id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!(
                    "Professional {} not found",
                    request.professional_id
                ))
            })?;

        request.validate()?;

        let unavailability = ProfessionalUnavailability::new(request);
        self.db.create_unavailability(&unavailability).await?;

        tracing::info!(
            "Created {} unavailability for professional {} ({} to {})",
            unavailability.reason,
            professional.id,
            unavailability.start_date,
            unavailability.end_date
        );
        Ok(unavailability)
    }

    pub async fn delete_unavailability(&self, id: &str) -> DomainResult<()> {
        self.db.delete_unavailability(id).await?;
        tracing::info!("Deleted unavailability {}", id);
        Ok(())
    }

    pub async fn list_for_professional(
        &self,
        professional_id: &str,
    ) -> DomainResult<Vec<ProfessionalUnavailability>> {
        self.db
            .list_unavailability_for_professional(professional_id)
            .await
    }

    /// Every blackout covering `date` for the professional.
    pub async fn blocks_covering(
        &self,
        professional_id: &str,
        date: NaiveDate,
    ) -> DomainResult<Vec<ProfessionalUnavailability>> {
        self.db.unavailability_covering(professional_id, date).await
    }
}
