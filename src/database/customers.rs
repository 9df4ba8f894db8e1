use crate::{
    database::Database,
    errors::{DomainError, DomainResult},
    models::Customer,
};

impl Database {
    pub async fn create_customer(&self, customer: &Customer) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO customers (id, first_name, last_name, email, phone,
                 points, total_points_earned, total_points_redeemed, level,
                 total_appointments, completed_appointments, cancelled_appointments,
                 no_show_count, preferred_branch_id, preferred_professional_id,
                 created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&customer.id)
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(customer.points)
        .bind(customer.total_points_earned)
        .bind(customer.total_points_redeemed)
        .bind(customer.level)
        .bind(customer.total_appointments)
        .bind(customer.completed_appointments)
        .bind(customer.cancelled_appointments)
        .bind(customer.no_show_count)
        .bind(&customer.preferred_branch_id)
        .bind(&customer.preferred_professional_id)
        .bind(&customer.created_at)
        .bind(&customer.updated_at)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    pub async fn get_customer(&self, id: &str) -> DomainResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(customer)
    }

    pub async fn get_customer_by_email(&self, email: &str) -> DomainResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE email = ?")
            .bind(email.to_lowercase())
            .fetch_optional(self.pool())
            .await?;

        Ok(customer)
    }

    /// Persist the loyalty ledger after add/redeem.
    pub async fn update_customer_points(&self, customer: &Customer) -> DomainResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            "UPDATE customers
             SET points = ?, total_points_earned = ?, total_points_redeemed = ?,
                 level = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(customer.points)
        .bind(customer.total_points_earned)
        .bind(customer.total_points_redeemed)
        .bind(customer.level)
        .bind(&now)
        .bind(&customer.id)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Customer {} not found",
                customer.id
            )));
        }

        Ok(())
    }

    pub async fn delete_customer(&self, id: &str) -> DomainResult<()> {
        sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(())
    }
}
