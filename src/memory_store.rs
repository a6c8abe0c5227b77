use crate::errors::AppError;
use crate::models::{Lead, LeadStatus, NewLead};
use crate::store::LeadStore;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

/// State owned by the ephemeral store: the records plus the next id to
/// assign. Kept behind one mutex so id assignment and insertion are a
/// single atomic step.
#[derive(Debug)]
struct MemoryInner {
    leads: Vec<Lead>,
    next_id: i64,
}

/// Process-lifetime lead store. Everything is lost on restart.
///
/// The mutex is a plain `std::sync::Mutex`: no await points occur while
/// it is held, and contention is negligible at this traffic level.
#[derive(Debug)]
pub struct MemoryLeadStore {
    inner: Mutex<MemoryInner>,
}

impl Default for MemoryLeadStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLeadStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MemoryInner {
                leads: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryInner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::Internal("lead store mutex poisoned".to_string()))
    }
}

#[async_trait]
impl LeadStore for MemoryLeadStore {
    async fn create_lead(&self, input: NewLead) -> Result<Lead, AppError> {
        let mut inner = self.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;

        let lead = Lead {
            id,
            lead_type: input.lead_type,
            name: input.name,
            email: input.email,
            company: input.company,
            app_name: input.app_name,
            budget: input.budget,
            mau: input.mau,
            created_at: Utc::now(),
            status: LeadStatus::New,
        };
        inner.leads.push(lead.clone());

        Ok(lead)
    }

    async fn list_leads(&self) -> Result<Vec<Lead>, AppError> {
        let inner = self.lock()?;
        let mut leads = inner.leads.clone();
        // Records are append-only with per-process monotonic timestamps, so
        // this is insertion order reversed; id breaks same-instant ties.
        leads.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(leads)
    }

    async fn update_lead_status(
        &self,
        id: i64,
        status: LeadStatus,
    ) -> Result<Option<Lead>, AppError> {
        let mut inner = self.lock()?;
        match inner.leads.iter_mut().find(|l| l.id == id) {
            Some(lead) => {
                lead.status = status;
                Ok(Some(lead.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_lead(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.lock()?;
        let before = inner.leads.len();
        inner.leads.retain(|l| l.id != id);
        Ok(inner.leads.len() < before)
    }
}
