use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::models::branch::Branch;
use crate::models::time_range::{TimeRange, Weekday};

/// A recurring weekly working window for one professional at one branch.
/// The store enforces at most one row per (professional, branch, weekday):
/// split shifts within the same day and branch are not supported.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProfessionalSchedule {
    pub id: String,
    pub professional_id: String,
    pub branch_id: String,
    pub weekday: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl ProfessionalSchedule {
    pub fn new(request: CreateScheduleRequest) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            professional_id: request.professional_id,
            branch_id: request.branch_id,
            weekday: request.weekday,
            start_time: request.start_time,
            end_time: request.end_time,
            is_active: true,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn window(&self) -> TimeRange {
        TimeRange::new(self.start_time, self.end_time)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateScheduleRequest {
    pub professional_id: String,
    pub branch_id: String,
    pub weekday: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl CreateScheduleRequest {
    /// Shared write-time validation, applied identically from any entry
    /// point. `branch` is the resolved target branch and
    /// `assigned_branch_ids` the professional's current assignment set.
    pub fn validate(
        &self,
        branch: &Branch,
        assigned_branch_ids: &[String],
    ) -> Result<(), ValidationError> {
        if self.end_time <= self.start_time {
            return Err(ValidationError::new(
                "end_time",
                "end_time must be after start_time",
            ));
        }
        if !assigned_branch_ids.iter().any(|id| id == &branch.id) {
            return Err(ValidationError::new(
                "branch_id",
                format!("professional is not assigned to branch '{}'", branch.name),
            ));
        }
        Ok(())
    }
}

/// Whole-row replacement edit; no partial time shifting.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateScheduleRequest {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_active: bool,
}

impl UpdateScheduleRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.end_time <= self.start_time {
            return Err(ValidationError::new(
                "end_time",
                "end_time must be after start_time",
            ));
        }
        Ok(())
    }
}

/// Outcome of the bulk default-schedule seeding. Existing triples are
/// counted separately from newly created rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub created: usize,
    pub skipped: usize,
}

/// Display shaping: fold a professional's schedules into an ordered map
/// from branch id to its schedules, each list ordered by weekday then
/// start time.
pub fn group_by_branch(
    schedules: Vec<ProfessionalSchedule>,
) -> BTreeMap<String, Vec<ProfessionalSchedule>> {
    let mut grouped: BTreeMap<String, Vec<ProfessionalSchedule>> = BTreeMap::new();
    for schedule in schedules {
        grouped
            .entry(schedule.branch_id.clone())
            .or_default()
            .push(schedule);
    }
    for entries in grouped.values_mut() {
        entries.sort_by_key(|schedule| (schedule.weekday, schedule.start_time));
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::branch::CreateBranchRequest;

    fn t(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    fn branch(name: &str) -> Branch {
        Branch::new(CreateBranchRequest {
            name: name.to_string(),
            address: None,
            phone: None,
            email: None,
            description: None,
            image: None,
            opening_time: t(9, 0),
            closing_time: t(19, 0),
            monday_open: true,
            tuesday_open: true,
            wednesday_open: true,
            thursday_open: true,
            friday_open: true,
            saturday_open: false,
            sunday_open: false,
            latitude: None,
            longitude: None,
            total_chairs: None,
        })
    }

    fn schedule_for(branch_id: &str, weekday: Weekday, start: (u32, u32)) -> ProfessionalSchedule {
        ProfessionalSchedule::new(CreateScheduleRequest {
            professional_id: "prof-1".to_string(),
            branch_id: branch_id.to_string(),
            weekday,
            start_time: t(start.0, start.1),
            end_time: t(18, 0),
        })
    }

    #[test]
    fn test_validate_rejects_inverted_window() {
        let target = branch("Centro");
        let request = CreateScheduleRequest {
            professional_id: "prof-1".to_string(),
            branch_id: target.id.clone(),
            weekday: Weekday::Monday,
            start_time: t(18, 0),
            end_time: t(9, 0),
        };
        let err = request.validate(&target, &[target.id.clone()]).unwrap_err();
        assert_eq!(err.field, "end_time");
    }

    #[test]
    fn test_validate_names_unassigned_branch() {
        let target = branch("Centro");
        let request = CreateScheduleRequest {
            professional_id: "prof-1".to_string(),
            branch_id: target.id.clone(),
            weekday: Weekday::Monday,
            start_time: t(9, 0),
            end_time: t(18, 0),
        };
        let err = request
            .validate(&target, &["other-branch".to_string()])
            .unwrap_err();
        assert_eq!(err.field, "branch_id");
        assert!(err.message.contains("Centro"), "message was: {}", err.message);

        assert!(request.validate(&target, &[target.id.clone()]).is_ok());
    }

    #[test]
    fn test_group_by_branch_orders_entries() {
        let schedules = vec![
            schedule_for("branch-b", Weekday::Wednesday, (9, 0)),
            schedule_for("branch-a", Weekday::Friday, (9, 0)),
            schedule_for("branch-b", Weekday::Monday, (9, 0)),
            schedule_for("branch-a", Weekday::Monday, (9, 0)),
        ];
        let grouped = group_by_branch(schedules);

        let branches: Vec<&String> = grouped.keys().collect();
        assert_eq!(branches, ["branch-a", "branch-b"]);

        let weekdays: Vec<Weekday> = grouped["branch-b"]
            .iter()
            .map(|schedule| schedule.weekday)
            .collect();
        assert_eq!(weekdays, [Weekday::Monday, Weekday::Wednesday]);
    }
}
