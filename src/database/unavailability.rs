use chrono::NaiveDate;

use crate::{
    database::Database,
    errors::DomainResult,
    models::ProfessionalUnavailability,
};

impl Database {
    pub async fn create_unavailability(
        &self,
        unavailability: &ProfessionalUnavailability,
    ) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO professional_unavailability (id, professional_id, start_date, end_date,
                 start_time, end_time, reason, notes, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&unavailability.id)
        .bind(&unavailability.professional_id)
        .bind(unavailability.start_date)
        .bind(unavailability.end_date)
        .bind(unavailability.start_time)
        .bind(unavailability.end_time)
        .bind(unavailability.reason)
        .bind(&unavailability.notes)
        .bind(&unavailability.created_at)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    pub async fn get_unavailability(
        &self,
        id: &str,
    ) -> DomainResult<Option<ProfessionalUnavailability>> {
        let unavailability = sqlx::query_as::<_, ProfessionalUnavailability>(
            "SELECT * FROM professional_unavailability WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(unavailability)
    }

    pub async fn list_unavailability_for_professional(
        &self,
        professional_id: &str,
    ) -> DomainResult<Vec<ProfessionalUnavailability>> {
        let blocks = sqlx::query_as::<_, ProfessionalUnavailability>(
            "SELECT * FROM professional_unavailability
             WHERE professional_id = ?
             ORDER BY start_date DESC",
        )
        .bind(professional_id)
        .fetch_all(self.pool())
        .await?;

        Ok(blocks)
    }

    /// Every record whose [start_date, end_date] interval contains `date`.
    pub async fn unavailability_covering(
        &self,
        professional_id: &str,
        date: NaiveDate,
    ) -> DomainResult<Vec<ProfessionalUnavailability>> {
        let blocks = sqlx::query_as::<_, ProfessionalUnavailability>(
            "SELECT * FROM professional_unavailability
             WHERE professional_id = ? AND start_date <= ? AND end_date >= ?
             ORDER BY start_date ASC",
        )
        .bind(professional_id)
        .bind(date)
        .bind(date)
        .fetch_all(self.pool())
        .await?;

        Ok(blocks)
    }

    pub async fn delete_unavailability(&self, id: &str) -> DomainResult<()> {
        sqlx::query("DELETE FROM professional_unavailability WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(())
    }
}
