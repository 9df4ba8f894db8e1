use crate::{
    database::Database,
    errors::{DomainError, DomainResult},
    models::Service,
};

impl Database {
    pub async fn create_service(&self, service: &Service) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO services (id, name, description, price, duration_minutes,
                 requires_deposit, deposit_amount, points_earned, image, is_active,
                 created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&service.id)
        .bind(&service.name)
        .bind(&service.description)
        .bind(service.price)
        .bind(service.duration_minutes)
        .bind(service.requires_deposit)
        .bind(service.deposit_amount)
        .bind(service.points_earned)
        .bind(&service.image)
        .bind(service.is_active)
        .bind(&service.created_at)
        .bind(&service.updated_at)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    pub async fn get_service(&self, id: &str) -> DomainResult<Option<Service>> {
        let service = sqlx::query_as::<_, Service>("SELECT * FROM services WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(service)
    }

    pub async fn list_active_services(&self) -> DomainResult<Vec<Service>> {
        let services = sqlx::query_as::<_, Service>(
            "SELECT * FROM services WHERE is_active = 1 ORDER BY name ASC",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(services)
    }

    pub async fn set_service_active(&self, id: &str, is_active: bool) -> DomainResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query("UPDATE services SET is_active = ?, updated_at = ? WHERE id = ?")
            .bind(is_active)
            .bind(&now)
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("Service {} not found", id)));
        }

        Ok(())
    }

    pub async fn delete_service(&self, id: &str) -> DomainResult<()> {
        sqlx::query("DELETE FROM services WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(())
    }
}
