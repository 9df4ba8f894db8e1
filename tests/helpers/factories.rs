use chrono::{NaiveDate, NaiveTime};
use salonbook::database::Database;
use salonbook::models::{
    Branch, CreateBranchRequest, CreateProfessionalRequest, CreateScheduleRequest,
    CreateUnavailabilityRequest, Professional, ProfessionalSchedule, ProfessionalUnavailability,
    UnavailabilityReason, Weekday,
};

pub fn time(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A branch open Monday through Friday with the given daily window.
pub async fn create_test_branch(
    db: &Database,
    name: &str,
    opening: NaiveTime,
    closing: NaiveTime,
) -> Branch {
    create_test_branch_with_days(db, name, opening, closing, &Weekday::MONDAY_TO_FRIDAY).await
}

pub async fn create_test_branch_with_days(
    db: &Database,
    name: &str,
    opening: NaiveTime,
    closing: NaiveTime,
    open_days: &[Weekday],
) -> Branch {
    let branch = Branch::new(CreateBranchRequest {
        name: name.to_string(),
        address: Some("Av. Siempre Viva 123".to_string()),
        phone: None,
        email: None,
        description: None,
        image: None,
        opening_time: opening,
        closing_time: closing,
        monday_open: open_days.contains(&Weekday::Monday),
        tuesday_open: open_days.contains(&Weekday::Tuesday),
        wednesday_open: open_days.contains(&Weekday::Wednesday),
        thursday_open: open_days.contains(&Weekday::Thursday),
        friday_open: open_days.contains(&Weekday::Friday),
        saturday_open: open_days.contains(&Weekday::Saturday),
        sunday_open: open_days.contains(&Weekday::Sunday),
        latitude: None,
        longitude: None,
        total_chairs: None,
    });

    db.create_branch(&branch)
        .await
        .expect("Failed to create test branch");
    branch
}

/// A professional assigned to the given branches.
pub async fn create_test_professional(
    db: &Database,
    first_name: &str,
    last_name: &str,
    branches: &[&Branch],
) -> Professional {
    let professional = Professional::new(CreateProfessionalRequest {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        phone: None,
        bio: None,
        specialties: None,
        experience_years: None,
        profile_picture: None,
        branch_ids: vec![],
        service_ids: vec![],
    });

    db.create_professional(&professional)
        .await
        .expect("Failed to create test professional");

    for branch in branches {
        db.assign_branch(&professional.id, &branch.id)
            .await
            .expect("Failed to assign branch");
    }

    professional
}

/// Insert a schedule row directly, bypassing service validation.
pub async fn create_test_schedule(
    db: &Database,
    professional: &Professional,
    branch: &Branch,
    weekday: Weekday,
    start: NaiveTime,
    end: NaiveTime,
) -> ProfessionalSchedule {
    let schedule = ProfessionalSchedule::new(CreateScheduleRequest {
        professional_id: professional.id.clone(),
        branch_id: branch.id.clone(),
        weekday,
        start_time: start,
        end_time: end,
    });

    db.create_schedule(&schedule)
        .await
        .expect("Failed to create test schedule");
    schedule
}

pub async fn create_full_day_block(
    db: &Database,
    professional: &Professional,
    start_date: NaiveDate,
    end_date: NaiveDate,
    reason: UnavailabilityReason,
) -> ProfessionalUnavailability {
    let block = ProfessionalUnavailability::new(CreateUnavailabilityRequest {
        professional_id: professional.id.clone(),
        start_date,
        end_date,
        start_time: None,
        end_time: None,
        reason,
        notes: None,
    });

    db.create_unavailability(&block)
        .await
        .expect("Failed to create unavailability");
    block
}

pub async fn create_partial_block(
    db: &Database,
    professional: &Professional,
    start_date: NaiveDate,
    end_date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> ProfessionalUnavailability {
    let block = ProfessionalUnavailability::new(CreateUnavailabilityRequest {
        professional_id: professional.id.clone(),
        start_date,
        end_date,
        start_time: Some(start),
        end_time: Some(end),
        reason: UnavailabilityReason::Personal,
        notes: None,
    });

    db.create_unavailability(&block)
        .await
        .expect("Failed to create unavailability");
    block
}
