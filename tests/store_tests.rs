/// Storage-layer tests for the durable SQLite backend.
///
/// These run against a real SQLite database (in-memory, or a temp file
/// where persistence across reconnects matters), so the schema, row
/// mapping, and RETURNING statements are exercised for real.
use amplera_leads::db::Database;
use amplera_leads::models::{LeadStatus, LeadType, NewLead};
use amplera_leads::sqlite_store::SqliteLeadStore;
use amplera_leads::store::LeadStore;

fn sample_input(name: &str, lead_type: LeadType) -> NewLead {
    NewLead {
        lead_type,
        name: name.to_string(),
        email: format!("{}@example.com", name),
        company: Some("Acme".to_string()),
        app_name: None,
        budget: Some("$10K".to_string()),
        mau: None,
    }
}

async fn in_memory_store() -> SqliteLeadStore {
    let db = Database::in_memory().await.expect("in-memory sqlite");
    SqliteLeadStore::new(db.pool)
}

#[tokio::test]
async fn create_assigns_id_timestamp_and_new_status() {
    let store = in_memory_store().await;

    let lead = store
        .create_lead(sample_input("jane", LeadType::Advertiser))
        .await
        .unwrap();

    assert_eq!(lead.id, 1);
    assert_eq!(lead.status, LeadStatus::New);
    assert_eq!(lead.lead_type, LeadType::Advertiser);
    assert_eq!(lead.name, "jane");
    assert_eq!(lead.company.as_deref(), Some("Acme"));
    assert_eq!(lead.app_name, None);
}

#[tokio::test]
async fn ids_are_unique_and_increasing() {
    let store = in_memory_store().await;
    let mut last_id = 0;
    for name in ["a", "b", "c", "d"] {
        let lead = store
            .create_lead(sample_input(name, LeadType::Publisher))
            .await
            .unwrap();
        assert!(lead.id > last_id);
        last_id = lead.id;
    }
}

#[tokio::test]
async fn list_returns_newest_first() {
    let store = in_memory_store().await;
    for name in ["first", "second", "third"] {
        store
            .create_lead(sample_input(name, LeadType::Advertiser))
            .await
            .unwrap();
    }

    let leads = store.list_leads().await.unwrap();
    let names: Vec<_> = leads.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["third", "second", "first"]);
    assert!(leads.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[tokio::test]
async fn list_on_empty_table_is_ok() {
    let store = in_memory_store().await;
    assert!(store.list_leads().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_status_round_trips_and_preserves_fields() {
    let store = in_memory_store().await;
    let created = store
        .create_lead(sample_input("jane", LeadType::Advertiser))
        .await
        .unwrap();

    let updated = store
        .update_lead_status(created.id, LeadStatus::Contacted)
        .await
        .unwrap()
        .expect("lead exists");

    assert_eq!(updated.status, LeadStatus::Contacted);
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.company, created.company);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn update_status_on_unknown_id_is_a_miss_not_an_error() {
    let store = in_memory_store().await;
    store
        .create_lead(sample_input("jane", LeadType::Advertiser))
        .await
        .unwrap();

    let result = store
        .update_lead_status(99, LeadStatus::Closed)
        .await
        .unwrap();
    assert!(result.is_none());
    assert_eq!(store.list_leads().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_removes_exactly_one_row() {
    let store = in_memory_store().await;
    let a = store
        .create_lead(sample_input("a", LeadType::Advertiser))
        .await
        .unwrap();
    store
        .create_lead(sample_input("b", LeadType::Publisher))
        .await
        .unwrap();

    assert!(store.delete_lead(a.id).await.unwrap());
    assert!(!store.delete_lead(a.id).await.unwrap());
    assert_eq!(store.list_leads().await.unwrap().len(), 1);
}

#[tokio::test]
async fn leads_survive_a_reconnect() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("amplera.db");

    {
        let db = Database::new(&path).await.unwrap();
        let store = SqliteLeadStore::new(db.pool);
        store
            .create_lead(sample_input("jane", LeadType::Advertiser))
            .await
            .unwrap();
    }

    let db = Database::new(&path).await.unwrap();
    let store = SqliteLeadStore::new(db.pool);
    let leads = store.list_leads().await.unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].name, "jane");
    assert_eq!(leads[0].status, LeadStatus::New);
}

#[tokio::test]
async fn database_creates_missing_data_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("amplera.db");

    let db = Database::new(&path).await.unwrap();
    let store = SqliteLeadStore::new(db.pool);
    store
        .create_lead(sample_input("jane", LeadType::Publisher))
        .await
        .unwrap();

    assert!(path.exists());
}
