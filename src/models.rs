use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

// ============ Database Models ============

/// Whether an inquiry came from an advertiser or a publisher.
///
/// Immutable after the lead is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum LeadType {
    /// Wants to buy ad inventory.
    Advertiser,
    /// Wants to monetize an app.
    Publisher,
}

impl FromStr for LeadType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "advertiser" => Ok(LeadType::Advertiser),
            "publisher" => Ok(LeadType::Publisher),
            other => Err(format!("Invalid lead type: {}", other)),
        }
    }
}

impl fmt::Display for LeadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadType::Advertiser => write!(f, "advertiser"),
            LeadType::Publisher => write!(f, "publisher"),
        }
    }
}

/// Follow-up state of a lead.
///
/// Defaults to `New` at creation; mutable only via the update-status
/// operation. Transitions are unconstrained (any value may follow any
/// other).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum LeadStatus {
    /// Just submitted, nobody has looked at it yet.
    New,
    /// Sales reached out.
    Contacted,
    /// Vetted as a real opportunity.
    Qualified,
    /// Deal closed (won or lost).
    Closed,
}

impl FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(LeadStatus::New),
            "contacted" => Ok(LeadStatus::Contacted),
            "qualified" => Ok(LeadStatus::Qualified),
            "closed" => Ok(LeadStatus::Closed),
            other => Err(format!("Invalid lead status: {}", other)),
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadStatus::New => write!(f, "new"),
            LeadStatus::Contacted => write!(f, "contacted"),
            LeadStatus::Qualified => write!(f, "qualified"),
            LeadStatus::Closed => write!(f, "closed"),
        }
    }
}

/// A single business-inquiry record submitted via the contact form.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Lead {
    /// Unique identifier, assigned by the store at creation. Never reused.
    pub id: i64,
    /// Advertiser or publisher.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub lead_type: LeadType,
    /// Contact name.
    pub name: String,
    /// Contact email. Presence-checked only, no format validation.
    pub email: String,
    /// Company name, if provided.
    pub company: Option<String>,
    /// App name (publishers), if provided.
    pub app_name: Option<String>,
    /// Free-form budget figure (e.g. "$10K"), if provided.
    pub budget: Option<String>,
    /// Free-form monthly-active-user figure, if provided.
    pub mau: Option<String>,
    /// Assigned at creation, immutable. Sole sort key for listing.
    pub created_at: DateTime<Utc>,
    /// Follow-up state, `new` at creation.
    pub status: LeadStatus,
}

/// Validated input for creating a lead. Produced by the API layer after
/// presence checks; the store fills in `id`, `created_at` and `status`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub lead_type: LeadType,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub app_name: Option<String>,
    pub budget: Option<String>,
    pub mau: Option<String>,
}

// ============ Request Payloads ============

/// Raw `POST /leads` body. Everything is optional here so that missing
/// fields surface as a 400 validation error instead of a deserialization
/// rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitLeadRequest {
    #[serde(rename = "type")]
    pub lead_type: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub app_name: Option<String>,
    pub budget: Option<String>,
    pub mau: Option<String>,
}

/// Raw `PATCH /leads` body.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLeadStatusRequest {
    pub id: Option<i64>,
    pub status: Option<String>,
}
