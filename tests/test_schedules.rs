mod helpers;

use helpers::*;
use salonbook::{
    errors::DomainError,
    models::{CreateScheduleRequest, UpdateScheduleRequest, Weekday},
    services::ScheduleService,
};

#[tokio::test]
async fn test_create_schedule_rejects_unassigned_branch() {
    let db = setup_test_db().await;
    let centro = create_test_branch(&db, "Centro", time(9, 0), time(19, 0)).await;
    let norte = create_test_branch(&db, "Norte", time(9, 0), time(19, 0)).await;
    let ana = create_test_professional(&db, "Ana", "García", &[&centro]).await;

    let service = ScheduleService::new(db.clone());
    let result = service
        .create_schedule(CreateScheduleRequest {
            professional_id: ana.id.clone(),
            branch_id: norte.id.clone(),
            weekday: Weekday::Monday,
            start_time: time(9, 0),
            end_time: time(18, 0),
        })
        .await;

    match result {
        Err(DomainError::Validation(err)) => {
            assert_eq!(err.field, "branch_id");
            assert!(err.message.contains("Norte"), "message was: {}", err.message);
        }
        other => panic!("expected validation error, got {:?}", other.map(|s| s.id)),
    }

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_create_schedule_rejects_inverted_window() {
    let db = setup_test_db().await;
    let centro = create_test_branch(&db, "Centro", time(9, 0), time(19, 0)).await;
    let ana = create_test_professional(&db, "Ana", "García", &[&centro]).await;

    let service = ScheduleService::new(db.clone());
    let result = service
        .create_schedule(CreateScheduleRequest {
            professional_id: ana.id.clone(),
            branch_id: centro.id.clone(),
            weekday: Weekday::Monday,
            start_time: time(18, 0),
            end_time: time(9, 0),
        })
        .await;

    match result {
        Err(DomainError::Validation(err)) => assert_eq!(err.field, "end_time"),
        other => panic!("expected validation error, got {:?}", other.map(|s| s.id)),
    }

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_duplicate_triple_is_a_conflict() {
    let db = setup_test_db().await;
    let centro = create_test_branch(&db, "Centro", time(9, 0), time(19, 0)).await;
    let ana = create_test_professional(&db, "Ana", "García", &[&centro]).await;

    let service = ScheduleService::new(db.clone());
    let request = CreateScheduleRequest {
        professional_id: ana.id.clone(),
        branch_id: centro.id.clone(),
        weekday: Weekday::Monday,
        start_time: time(9, 0),
        end_time: time(18, 0),
    };

    service
        .create_schedule(request.clone())
        .await
        .expect("first insert should succeed");

    let result = service.create_schedule(request).await;
    assert!(
        matches!(result, Err(DomainError::Conflict(_))),
        "second insert for the same triple must hit the unique index"
    );

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_seed_default_schedule_is_idempotent() {
    let db = setup_test_db().await;
    let centro = create_test_branch(&db, "Centro", time(9, 0), time(19, 0)).await;
    let norte = create_test_branch(&db, "Norte", time(9, 0), time(19, 0)).await;
    let ana = create_test_professional(&db, "Ana", "García", &[&centro, &norte]).await;

    let service = ScheduleService::new(db.clone());

    let first = service
        .seed_default_schedule(&ana.id)
        .await
        .expect("first seed should succeed");
    assert_eq!(first.created, 10, "Mon-Fri for two branches");
    assert_eq!(first.skipped, 0);

    let second = service
        .seed_default_schedule(&ana.id)
        .await
        .expect("second seed should succeed");
    assert_eq!(second.created, 0);
    assert_eq!(second.skipped, 10);

    let rows = db
        .list_schedules_for_professional(&ana.id)
        .await
        .expect("Failed to list schedules");
    assert_eq!(rows.len(), 10);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_seed_leaves_existing_entries_untouched() {
    let db = setup_test_db().await;
    let centro = create_test_branch(&db, "Centro", time(9, 0), time(19, 0)).await;
    let ana = create_test_professional(&db, "Ana", "García", &[&centro]).await;

    // Pre-existing Monday window with custom hours
    let custom =
        create_test_schedule(&db, &ana, &centro, Weekday::Monday, time(10, 0), time(14, 0)).await;

    let service = ScheduleService::new(db.clone());
    let report = service
        .seed_default_schedule(&ana.id)
        .await
        .expect("seed should succeed");
    assert_eq!(report.created, 4, "Tue-Fri only");
    assert_eq!(report.skipped, 1);

    let monday = db
        .get_schedule_for(&ana.id, &centro.id, Weekday::Monday)
        .await
        .expect("Failed to fetch schedule")
        .expect("Monday schedule should exist");
    assert_eq!(monday.id, custom.id);
    assert_eq!(monday.start_time, time(10, 0));
    assert_eq!(monday.end_time, time(14, 0));

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_recurring_window_ignores_inactive_rows() {
    let db = setup_test_db().await;
    let centro = create_test_branch(&db, "Centro", time(9, 0), time(19, 0)).await;
    let ana = create_test_professional(&db, "Ana", "García", &[&centro]).await;
    let schedule =
        create_test_schedule(&db, &ana, &centro, Weekday::Monday, time(9, 0), time(18, 0)).await;

    let service = ScheduleService::new(db.clone());
    let window = service
        .recurring_window(&ana.id, &centro.id, Weekday::Monday)
        .await
        .expect("Failed to resolve window");
    assert!(window.is_some());

    service
        .update_schedule(
            &schedule.id,
            UpdateScheduleRequest {
                start_time: time(9, 0),
                end_time: time(18, 0),
                is_active: false,
            },
        )
        .await
        .expect("Failed to deactivate schedule");

    let window = service
        .recurring_window(&ana.id, &centro.id, Weekday::Monday)
        .await
        .expect("Failed to resolve window");
    assert!(window.is_none(), "inactive rows read as absent");

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_update_schedule_validates_times() {
    let db = setup_test_db().await;
    let centro = create_test_branch(&db, "Centro", time(9, 0), time(19, 0)).await;
    let ana = create_test_professional(&db, "Ana", "García", &[&centro]).await;
    let schedule =
        create_test_schedule(&db, &ana, &centro, Weekday::Monday, time(9, 0), time(18, 0)).await;

    let service = ScheduleService::new(db.clone());
    let result = service
        .update_schedule(
            &schedule.id,
            UpdateScheduleRequest {
                start_time: time(18, 0),
                end_time: time(9, 0),
                is_active: true,
            },
        )
        .await;

    match result {
        Err(DomainError::Validation(err)) => assert_eq!(err.field, "end_time"),
        other => panic!("expected validation error, got {:?}", other),
    }

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_schedules_grouped_by_branch() {
    let db = setup_test_db().await;
    let centro = create_test_branch(&db, "Centro", time(9, 0), time(19, 0)).await;
    let norte = create_test_branch(&db, "Norte", time(9, 0), time(19, 0)).await;
    let ana = create_test_professional(&db, "Ana", "García", &[&centro, &norte]).await;

    create_test_schedule(&db, &ana, &norte, Weekday::Wednesday, time(9, 0), time(18, 0)).await;
    create_test_schedule(&db, &ana, &centro, Weekday::Friday, time(9, 0), time(18, 0)).await;
    create_test_schedule(&db, &ana, &centro, Weekday::Monday, time(9, 0), time(18, 0)).await;

    let service = ScheduleService::new(db.clone());
    let grouped = service
        .schedules_by_branch(&ana.id)
        .await
        .expect("Failed to group schedules");

    assert_eq!(grouped.len(), 2);
    let centro_days: Vec<Weekday> = grouped[&centro.id]
        .iter()
        .map(|schedule| schedule.weekday)
        .collect();
    assert_eq!(centro_days, [Weekday::Monday, Weekday::Friday]);
    assert_eq!(grouped[&norte.id].len(), 1);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_deleting_branch_cascades_to_schedules() {
    let db = setup_test_db().await;
    let centro = create_test_branch(&db, "Centro", time(9, 0), time(19, 0)).await;
    let norte = create_test_branch(&db, "Norte", time(9, 0), time(19, 0)).await;
    let ana = create_test_professional(&db, "Ana", "García", &[&centro, &norte]).await;

    create_test_schedule(&db, &ana, &centro, Weekday::Monday, time(9, 0), time(18, 0)).await;
    create_test_schedule(&db, &ana, &norte, Weekday::Monday, time(9, 0), time(18, 0)).await;

    db.delete_branch(&centro.id)
        .await
        .expect("Failed to delete branch");

    let remaining = db
        .list_schedules_for_professional(&ana.id)
        .await
        .expect("Failed to list schedules");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].branch_id, norte.id);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_create_schedule_for_unknown_professional() {
    let db = setup_test_db().await;
    let centro = create_test_branch(&db, "Centro", time(9, 0), time(19, 0)).await;

    let service = ScheduleService::new(db.clone());
    let result = service
        .create_schedule(CreateScheduleRequest {
            professional_id: "missing".to_string(),
            branch_id: centro.id.clone(),
            weekday: Weekday::Monday,
            start_time: time(9, 0),
            end_time: time(18, 0),
        })
        .await;

    assert!(matches!(result, Err(DomainError::NotFound(_))));

    teardown_test_db(db).await;
}
