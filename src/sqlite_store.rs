use crate::errors::{AppError, ResultExt};
use crate::models::{Lead, LeadStatus, NewLead};
use crate::store::LeadStore;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

/// Durable lead store backed by a single SQLite table.
///
/// Each create/update is one atomic statement; no multi-statement
/// transactions are needed since there are no cross-record invariants.
pub struct SqliteLeadStore {
    pool: SqlitePool,
}

impl SqliteLeadStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeadStore for SqliteLeadStore {
    async fn create_lead(&self, input: NewLead) -> Result<Lead, AppError> {
        let lead = sqlx::query_as::<_, Lead>(
            r#"
            INSERT INTO leads (type, name, email, company, app_name, budget, mau, created_at, status)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            RETURNING *
            "#,
        )
        .bind(input.lead_type)
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.company)
        .bind(&input.app_name)
        .bind(&input.budget)
        .bind(&input.mau)
        .bind(Utc::now())
        .bind(LeadStatus::New)
        .fetch_one(&self.pool)
        .await
        .context("inserting lead")?;

        Ok(lead)
    }

    async fn list_leads(&self) -> Result<Vec<Lead>, AppError> {
        let leads = sqlx::query_as::<_, Lead>(
            "SELECT * FROM leads ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .context("listing leads")?;

        Ok(leads)
    }

    async fn update_lead_status(
        &self,
        id: i64,
        status: LeadStatus,
    ) -> Result<Option<Lead>, AppError> {
        let lead = sqlx::query_as::<_, Lead>(
            "UPDATE leads SET status = ?1 WHERE id = ?2 RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("updating lead status")?;

        Ok(lead)
    }

    async fn delete_lead(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM leads WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("deleting lead")?;

        Ok(result.rows_affected() > 0)
    }
}
