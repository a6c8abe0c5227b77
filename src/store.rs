use crate::errors::AppError;
use crate::models::{Lead, LeadStatus, NewLead};
use async_trait::async_trait;

/// Uniform storage contract for lead records.
///
/// Two interchangeable implementations exist: [`crate::sqlite_store::SqliteLeadStore`]
/// (durable, file-backed) and [`crate::memory_store::MemoryLeadStore`]
/// (process-lifetime). One is constructed at startup based on configuration
/// and injected into the API layer as a trait object, so no mode checks
/// leak into the handlers.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Persists a new lead. The store assigns `id` (next in sequence) and
    /// `created_at`, and sets `status` to `new`. Storage failure propagates.
    async fn create_lead(&self, input: NewLead) -> Result<Lead, AppError>;

    /// Returns all leads ordered by `created_at` descending (newest first).
    /// An empty store yields an empty vec, never an error.
    async fn list_leads(&self) -> Result<Vec<Lead>, AppError>;

    /// Sets the status of the lead with the given `id` and returns the
    /// updated record. `Ok(None)` on a lookup miss; a miss is a normal
    /// outcome, not a fault.
    async fn update_lead_status(
        &self,
        id: i64,
        status: LeadStatus,
    ) -> Result<Option<Lead>, AppError>;

    /// Removes a lead, returning whether a record was deleted. Present in
    /// the storage contract but not exposed through any HTTP route.
    async fn delete_lead(&self, id: i64) -> Result<bool, AppError>;
}
