use chrono::{NaiveDate, NaiveTime};

use crate::{
    database::Database,
    errors::DomainResult,
    models::{TimeRange, Weekday},
};

/// The composition point for booking queries: branch calendar, recurring
/// windows and the blackout ledger combined into a single answer.
///
/// Stateless per call; every resolution reads the currently-persisted
/// rows. Absence of coverage is an ordinary `false`/empty outcome, never
/// an error.
#[derive(Clone)]
pub struct AvailabilityService {
    db: Database,
}

impl AvailabilityService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Is the professional bookable at this branch for `[start, end)` on
    /// `date`?
    pub async fn is_available(
        &self,
        professional_id: &str,
        branch_id: &str,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> DomainResult<bool> {
        // Degenerate request windows are never bookable.
        if end <= start {
            return Ok(false);
        }
        let requested = TimeRange::new(start, end);

        let Some(window) = self.bookable_window(professional_id, branch_id, date).await? else {
            return Ok(false);
        };

        if !window.contains(&requested) {
            return Ok(false);
        }

        for block in self
            .db
            .unavailability_covering(professional_id, date)
            .await?
        {
            match block.blocked_window() {
                // Full-day blackout kills the whole date.
                None => return Ok(false),
                Some(blocked) if blocked.overlaps(&requested) => return Ok(false),
                Some(_) => {}
            }
        }

        Ok(true)
    }

    /// The professional's bookable sub-intervals at this branch on `date`,
    /// ascending. The recurring window is clipped to the branch's working
    /// hours, then every covering partial blackout is subtracted; a
    /// full-day blackout empties the result.
    pub async fn free_windows(
        &self,
        professional_id: &str,
        branch_id: &str,
        date: NaiveDate,
    ) -> DomainResult<Vec<TimeRange>> {
        let Some(window) = self.bookable_window(professional_id, branch_id, date).await? else {
            return Ok(Vec::new());
        };

        let mut blocked = Vec::new();
        for block in self
            .db
            .unavailability_covering(professional_id, date)
            .await?
        {
            match block.blocked_window() {
                None => return Ok(Vec::new()),
                Some(range) => blocked.push(range),
            }
        }

        Ok(window.subtract_all(&blocked))
    }

    /// The window within which requests can be booked, before blackouts:
    /// the recurring schedule clipped to branch hours. `None` when the
    /// professional or branch is missing/inactive, the professional is
    /// not assigned to the branch, the branch is closed that weekday, or
    /// no active schedule row exists for the triple.
    async fn bookable_window(
        &self,
        professional_id: &str,
        branch_id: &str,
        date: NaiveDate,
    ) -> DomainResult<Option<TimeRange>> {
        let Some(professional) = self.db.get_professional(professional_id).await? else {
            return Ok(None);
        };
        if !professional.is_active {
            return Ok(None);
        }

        let Some(branch) = self.db.get_branch(branch_id).await? else {
            return Ok(None);
        };
        if !branch.is_active {
            return Ok(None);
        }

        if !self
            .db
            .is_assigned_to_branch(professional_id, branch_id)
            .await?
        {
            return Ok(None);
        }

        let weekday = Weekday::from_date(date);
        if !branch.is_open(weekday) {
            return Ok(None);
        }

        let Some(schedule) = self
            .db
            .get_schedule_for(professional_id, branch_id, weekday)
            .await?
        else {
            return Ok(None);
        };

        Ok(schedule.window().intersect(&branch.working_hours()))
    }
}
