mod helpers;

use helpers::*;
use salonbook::{
    errors::DomainError,
    models::{CreateCustomerRequest, Customer, CustomerLevel},
};

fn customer_request(email: &str) -> CreateCustomerRequest {
    CreateCustomerRequest {
        first_name: "Lucía".to_string(),
        last_name: "Pérez".to_string(),
        email: email.to_string(),
        phone: None,
        preferred_branch_id: None,
        preferred_professional_id: None,
    }
}

#[tokio::test]
async fn test_loyalty_ledger_round_trip() {
    let db = setup_test_db().await;

    let mut customer = Customer::new(customer_request("lucia@example.com"));
    db.create_customer(&customer)
        .await
        .expect("Failed to create customer");

    customer.add_points(600);
    db.update_customer_points(&customer)
        .await
        .expect("Failed to persist points");

    let stored = db
        .get_customer(&customer.id)
        .await
        .expect("Failed to fetch customer")
        .expect("customer should exist");
    assert_eq!(stored.points, 600);
    assert_eq!(stored.level, CustomerLevel::Gold);
    assert_eq!(stored.total_points_earned, 600);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_duplicate_email_is_a_conflict() {
    let db = setup_test_db().await;

    let first = Customer::new(customer_request("lucia@example.com"));
    db.create_customer(&first)
        .await
        .expect("Failed to create customer");

    let second = Customer::new(customer_request("lucia@example.com"));
    let result = db.create_customer(&second).await;
    assert!(matches!(result, Err(DomainError::Conflict(_))));

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_lookup_by_email_is_case_insensitive() {
    let db = setup_test_db().await;

    let customer = Customer::new(customer_request("Lucia@Example.com"));
    db.create_customer(&customer)
        .await
        .expect("Failed to create customer");

    let found = db
        .get_customer_by_email("LUCIA@EXAMPLE.COM")
        .await
        .expect("Failed to fetch customer");
    assert!(found.is_some());

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_preferred_branch_cleared_on_branch_delete() {
    let db = setup_test_db().await;
    let centro = create_test_branch(&db, "Centro", time(9, 0), time(19, 0)).await;

    let mut request = customer_request("lucia@example.com");
    request.preferred_branch_id = Some(centro.id.clone());
    let customer = Customer::new(request);
    db.create_customer(&customer)
        .await
        .expect("Failed to create customer");

    db.delete_branch(&centro.id)
        .await
        .expect("Failed to delete branch");

    let stored = db
        .get_customer(&customer.id)
        .await
        .expect("Failed to fetch customer")
        .expect("customer should exist");
    assert_eq!(stored.preferred_branch_id, None);

    teardown_test_db(db).await;
}
