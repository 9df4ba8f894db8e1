use chrono::NaiveTime;

use crate::{
    database::Database,
    errors::{DomainError, DomainResult},
    models::{ProfessionalSchedule, SeedReport, UpdateScheduleRequest, Weekday},
};

impl Database {
    pub async fn create_schedule(&self, schedule: &ProfessionalSchedule) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO professional_schedules (id, professional_id, branch_id, weekday,
                 start_time, end_time, is_active, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&schedule.id)
        .bind(&schedule.professional_id)
        .bind(&schedule.branch_id)
        .bind(schedule.weekday)
        .bind(schedule.start_time)
        .bind(schedule.end_time)
        .bind(schedule.is_active)
        .bind(&schedule.created_at)
        .bind(&schedule.updated_at)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    pub async fn get_schedule(&self, id: &str) -> DomainResult<Option<ProfessionalSchedule>> {
        let schedule = sqlx::query_as::<_, ProfessionalSchedule>(
            "SELECT * FROM professional_schedules WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(schedule)
    }

    /// The active recurring window for an exact (professional, branch,
    /// weekday) triple. Inactive rows read as absent.
    pub async fn get_schedule_for(
        &self,
        professional_id: &str,
        branch_id: &str,
        weekday: Weekday,
    ) -> DomainResult<Option<ProfessionalSchedule>> {
        let schedule = sqlx::query_as::<_, ProfessionalSchedule>(
            "SELECT * FROM professional_schedules
             WHERE professional_id = ? AND branch_id = ? AND weekday = ? AND is_active = 1",
        )
        .bind(professional_id)
        .bind(branch_id)
        .bind(weekday)
        .fetch_optional(self.pool())
        .await?;

        Ok(schedule)
    }

    pub async fn list_schedules_for_professional(
        &self,
        professional_id: &str,
    ) -> DomainResult<Vec<ProfessionalSchedule>> {
        let schedules = sqlx::query_as::<_, ProfessionalSchedule>(
            "SELECT * FROM professional_schedules
             WHERE professional_id = ?
             ORDER BY branch_id ASC, weekday ASC, start_time ASC",
        )
        .bind(professional_id)
        .fetch_all(self.pool())
        .await?;

        Ok(schedules)
    }

    /// Whole-row replacement edit.
    pub async fn update_schedule(
        &self,
        id: &str,
        request: &UpdateScheduleRequest,
    ) -> DomainResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            "UPDATE professional_schedules
             SET start_time = ?, end_time = ?, is_active = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(request.start_time)
        .bind(request.end_time)
        .bind(request.is_active)
        .bind(&now)
        .bind(id)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("Schedule {} not found", id)));
        }

        Ok(())
    }

    pub async fn delete_schedule(&self, id: &str) -> DomainResult<()> {
        sqlx::query("DELETE FROM professional_schedules WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(())
    }

    /// Seed the default Monday-Friday window for every given branch in one
    /// transaction. Triples that already have a row (active or not) are
    /// skipped and counted separately, so re-running is a no-op.
    pub async fn seed_default_schedules(
        &self,
        professional_id: &str,
        branch_ids: &[String],
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> DomainResult<SeedReport> {
        let mut tx = self.pool().begin().await?;
        let mut created = 0;
        let mut skipped = 0;

        for branch_id in branch_ids {
            for weekday in Weekday::MONDAY_TO_FRIDAY {
                let existing = sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM professional_schedules
                     WHERE professional_id = ? AND branch_id = ? AND weekday = ?",
                )
                .bind(professional_id)
                .bind(branch_id)
                .bind(weekday)
                .fetch_one(&mut *tx)
                .await?;

                if existing > 0 {
                    skipped += 1;
                    continue;
                }

                let now = chrono::Utc::now().to_rfc3339();
                sqlx::query(
                    "INSERT INTO professional_schedules (id, professional_id, branch_id, weekday,
                         start_time, end_time, is_active, created_at, updated_at)
                     VALUES (?, ?, ?, ?, ?, ?, 1, ?, ?)",
                )
                .bind(uuid::Uuid::new_v4().to_string())
                .bind(professional_id)
                .bind(branch_id)
                .bind(weekday)
                .bind(start_time)
                .bind(end_time)
                .bind(&now)
                .bind(&now)
                .execute(&mut *tx)
                .await?;

                created += 1;
            }
        }

        tx.commit().await?;

        Ok(SeedReport { created, skipped })
    }
}
