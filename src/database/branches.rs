use crate::{
    database::Database,
    errors::{DomainError, DomainResult},
    models::Branch,
};

impl Database {
    /// Persist a new branch
    pub async fn create_branch(&self, branch: &Branch) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO branches (id, name, address, phone, email, description, image,
                 opening_time, closing_time,
                 monday_open, tuesday_open, wednesday_open, thursday_open, friday_open,
                 saturday_open, sunday_open,
                 latitude, longitude, total_chairs, is_active, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&branch.id)
        .bind(&branch.name)
        .bind(&branch.address)
        .bind(&branch.phone)
        .bind(&branch.email)
        .bind(&branch.description)
        .bind(&branch.image)
        .bind(branch.opening_time)
        .bind(branch.closing_time)
        .bind(branch.monday_open)
        .bind(branch.tuesday_open)
        .bind(branch.wednesday_open)
        .bind(branch.thursday_open)
        .bind(branch.friday_open)
        .bind(branch.saturday_open)
        .bind(branch.sunday_open)
        .bind(branch.latitude)
        .bind(branch.longitude)
        .bind(branch.total_chairs)
        .bind(branch.is_active)
        .bind(&branch.created_at)
        .bind(&branch.updated_at)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    pub async fn get_branch(&self, id: &str) -> DomainResult<Option<Branch>> {
        let branch = sqlx::query_as::<_, Branch>("SELECT * FROM branches WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(branch)
    }

    pub async fn list_branches(&self) -> DomainResult<Vec<Branch>> {
        let branches = sqlx::query_as::<_, Branch>("SELECT * FROM branches ORDER BY name ASC")
            .fetch_all(self.pool())
            .await?;

        Ok(branches)
    }

    pub async fn list_active_branches(&self) -> DomainResult<Vec<Branch>> {
        let branches = sqlx::query_as::<_, Branch>(
            "SELECT * FROM branches WHERE is_active = 1 ORDER BY name ASC",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(branches)
    }

    pub async fn set_branch_active(&self, id: &str, is_active: bool) -> DomainResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query("UPDATE branches SET is_active = ?, updated_at = ? WHERE id = ?")
            .bind(is_active)
            .bind(&now)
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("Branch {} not found", id)));
        }

        Ok(())
    }

    /// Delete a branch; dependent schedules go with it (cascade).
    pub async fn delete_branch(&self, id: &str) -> DomainResult<()> {
        sqlx::query("DELETE FROM branches WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(())
    }
}
