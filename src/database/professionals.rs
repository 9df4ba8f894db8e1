use crate::{
    database::Database,
    errors::{DomainError, DomainResult},
    models::{Branch, Professional, Service},
};

impl Database {
    pub async fn create_professional(&self, professional: &Professional) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO professionals (id, first_name, last_name, email, phone, bio,
                 specialties, experience_years, profile_picture,
                 total_appointments, completed_appointments, average_rating, total_reviews,
                 is_active, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&professional.id)
        .bind(&professional.first_name)
        .bind(&professional.last_name)
        .bind(&professional.email)
        .bind(&professional.phone)
        .bind(&professional.bio)
        .bind(&professional.specialties)
        .bind(professional.experience_years)
        .bind(&professional.profile_picture)
        .bind(professional.total_appointments)
        .bind(professional.completed_appointments)
        .bind(professional.average_rating)
        .bind(professional.total_reviews)
        .bind(professional.is_active)
        .bind(&professional.created_at)
        .bind(&professional.updated_at)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    pub async fn get_professional(&self, id: &str) -> DomainResult<Option<Professional>> {
        let professional =
            sqlx::query_as::<_, Professional>("SELECT * FROM professionals WHERE id = ?")
                .bind(id)
                .fetch_optional(self.pool())
                .await?;

        Ok(professional)
    }

    pub async fn list_active_professionals(&self) -> DomainResult<Vec<Professional>> {
        let professionals = sqlx::query_as::<_, Professional>(
            "SELECT * FROM professionals WHERE is_active = 1
             ORDER BY first_name ASC, last_name ASC",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(professionals)
    }

    /// Active professionals assigned to a branch.
    pub async fn list_professionals_by_branch(
        &self,
        branch_id: &str,
    ) -> DomainResult<Vec<Professional>> {
        let professionals = sqlx::query_as::<_, Professional>(
            "SELECT p.* FROM professionals p
             JOIN professional_branches pb ON pb.professional_id = p.id
             WHERE pb.branch_id = ? AND p.is_active = 1
             ORDER BY p.first_name ASC, p.last_name ASC",
        )
        .bind(branch_id)
        .fetch_all(self.pool())
        .await?;

        Ok(professionals)
    }

    /// Active professionals offering a service.
    pub async fn list_professionals_by_service(
        &self,
        service_id: &str,
    ) -> DomainResult<Vec<Professional>> {
        let professionals = sqlx::query_as::<_, Professional>(
            "SELECT p.* FROM professionals p
             JOIN professional_services ps ON ps.professional_id = p.id
             WHERE ps.service_id = ? AND p.is_active = 1
             ORDER BY p.first_name ASC, p.last_name ASC",
        )
        .bind(service_id)
        .fetch_all(self.pool())
        .await?;

        Ok(professionals)
    }

    pub async fn set_professional_active(&self, id: &str, is_active: bool) -> DomainResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        let result =
            sqlx::query("UPDATE professionals SET is_active = ?, updated_at = ? WHERE id = ?")
                .bind(is_active)
                .bind(&now)
                .bind(id)
                .execute(self.pool())
                .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Professional {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Delete a professional; schedules and unavailability go with it
    /// (cascade).
    pub async fn delete_professional(&self, id: &str) -> DomainResult<()> {
        sqlx::query("DELETE FROM professionals WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(())
    }

    // Branch assignments

    pub async fn assign_branch(&self, professional_id: &str, branch_id: &str) -> DomainResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT OR IGNORE INTO professional_branches (professional_id, branch_id, created_at)
             VALUES (?, ?, ?)",
        )
        .bind(professional_id)
        .bind(branch_id)
        .bind(&now)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    pub async fn unassign_branch(
        &self,
        professional_id: &str,
        branch_id: &str,
    ) -> DomainResult<()> {
        sqlx::query(
            "DELETE FROM professional_branches WHERE professional_id = ? AND branch_id = ?",
        )
        .bind(professional_id)
        .bind(branch_id)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    pub async fn assigned_branch_ids(&self, professional_id: &str) -> DomainResult<Vec<String>> {
        let ids = sqlx::query_scalar::<_, String>(
            "SELECT branch_id FROM professional_branches WHERE professional_id = ?",
        )
        .bind(professional_id)
        .fetch_all(self.pool())
        .await?;

        Ok(ids)
    }

    pub async fn assigned_branches(&self, professional_id: &str) -> DomainResult<Vec<Branch>> {
        let branches = sqlx::query_as::<_, Branch>(
            "SELECT b.* FROM branches b
             JOIN professional_branches pb ON pb.branch_id = b.id
             WHERE pb.professional_id = ?
             ORDER BY b.name ASC",
        )
        .bind(professional_id)
        .fetch_all(self.pool())
        .await?;

        Ok(branches)
    }

    pub async fn is_assigned_to_branch(
        &self,
        professional_id: &str,
        branch_id: &str,
    ) -> DomainResult<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM professional_branches
             WHERE professional_id = ? AND branch_id = ?",
        )
        .bind(professional_id)
        .bind(branch_id)
        .fetch_one(self.pool())
        .await?;

        Ok(count > 0)
    }

    // Service assignments

    pub async fn assign_service(
        &self,
        professional_id: &str,
        service_id: &str,
    ) -> DomainResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT OR IGNORE INTO professional_services (professional_id, service_id, created_at)
             VALUES (?, ?, ?)",
        )
        .bind(professional_id)
        .bind(service_id)
        .bind(&now)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    pub async fn unassign_service(
        &self,
        professional_id: &str,
        service_id: &str,
    ) -> DomainResult<()> {
        sqlx::query(
            "DELETE FROM professional_services WHERE professional_id = ? AND service_id = ?",
        )
        .bind(professional_id)
        .bind(service_id)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    pub async fn assigned_services(&self, professional_id: &str) -> DomainResult<Vec<Service>> {
        let services = sqlx::query_as::<_, Service>(
            "SELECT s.* FROM services s
             JOIN professional_services ps ON ps.service_id = s.id
             WHERE ps.professional_id = ?
             ORDER BY s.name ASC",
        )
        .bind(professional_id)
        .fetch_all(self.pool())
        .await?;

        Ok(services)
    }
}
