use chrono::NaiveTime;
use std::collections::BTreeMap;

use crate::{
    config::Config,
    database::Database,
    errors::{DomainError, DomainResult},
    models::{
        group_by_branch, CreateScheduleRequest, ProfessionalSchedule, SeedReport, TimeRange,
        UpdateScheduleRequest, Weekday,
    },
};

/// Service for managing recurring working windows.
#[derive(Clone)]
pub struct ScheduleService {
    db: Database,
    default_window: TimeRange,
}

impl ScheduleService {
    pub fn new(db: Database) -> Self {
        let start = NaiveTime::from_hms_opt(9, 0, 0).expect("valid default start");
        let end = NaiveTime::from_hms_opt(18, 0, 0).expect("valid default end");
        Self::with_default_window(db, TimeRange::new(start, end))
    }

    /// Override the window used by `seed_default_schedule`.
    pub fn with_default_window(db: Database, default_window: TimeRange) -> Self {
        Self { db, default_window }
    }

    pub fn from_config(db: Database, config: &Config) -> Self {
        Self::with_default_window(
            db,
            TimeRange::new(config.default_schedule_start, config.default_schedule_end),
        )
    }

    /// Validate and persist a new recurring window. The professional must
    /// already be assigned to the target branch; a second row for the same
    /// (professional, branch, weekday) triple is rejected by the store's
    /// unique index.
    pub async fn create_schedule(
        &self,
        request: CreateScheduleRequest,
    ) -> DomainResult<ProfessionalSchedule> {
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

        let branch = self.db.get_branch(&request.branch_id).await?.ok_or_else(|| {
            DomainError::NotFound(format!("Branch {} not found", request.branch_id))
        })?;

        let assigned = self.db.assigned_branch_ids(&professional.id).await?;
        request.validate(&branch, &assigned)?;

        let schedule = ProfessionalSchedule::new(request);
        self.db.create_schedule(&schedule).await?;

        tracing::info!(
            "Created schedule for professional {} at branch {} on {}",
            schedule.professional_id,
            schedule.branch_id,
            schedule.weekday
        );
        Ok(schedule)
    }

    /// Whole-row replacement edit of an existing schedule.
    pub async fn update_schedule(
        &self,
        schedule_id: &str,
        request: UpdateScheduleRequest,
    ) -> DomainResult<()> {
        request.validate()?;
        self.db.update_schedule(schedule_id, &request).await?;

        tracing::info!("Updated schedule {}", schedule_id);
        Ok(())
    }

    pub async fn delete_schedule(&self, schedule_id: &str) -> DomainResult<()> {
        self.db.delete_schedule(schedule_id).await?;
        tracing::info!("Deleted schedule {}", schedule_id);
        Ok(())
    }

    /// The active recurring window for a (professional, branch, weekday)
    /// triple, or `None` when absent or inactive.
    pub async fn recurring_window(
        &self,
        professional_id: &str,
        branch_id: &str,
        weekday: Weekday,
    ) -> DomainResult<Option<TimeRange>> {
        let schedule = self
            .db
            .get_schedule_for(professional_id, branch_id, weekday)
            .await?;
        Ok(schedule.map(|entry| entry.window()))
    }

    /// A professional's schedules grouped per branch for display.
    pub async fn schedules_by_branch(
        &self,
        professional_id: &str,
    ) -> DomainResult<BTreeMap<String, Vec<ProfessionalSchedule>>> {
        let schedules = self
            .db
            .list_schedules_for_professional(professional_id)
            .await?;
        Ok(group_by_branch(schedules))
    }

    /// Seed the default Monday-Friday window for every branch the
    /// professional is assigned to. Idempotent: triples that already
    /// exist are skipped and reported separately.
    pub async fn seed_default_schedule(&self, professional_id: &str) -> DomainResult<SeedReport> {
        let professional = self
            .db
            .get_professional(professional_id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!("Professional {} not found", professional_id))
            })?;

        let branch_ids = self.db.assigned_branch_ids(&professional.id).await?;
        let report = self
            .db
            .seed_default_schedules(
                &professional.id,
                &branch_ids,
                self.default_window.start,
                self.default_window.end,
            )
            .await?;

        tracing::info!(
            "Seeded default schedule for professional {}: {} created, {} skipped",
            professional.id,
            report.created,
            report.skipped
        );
        Ok(report)
    }
}
