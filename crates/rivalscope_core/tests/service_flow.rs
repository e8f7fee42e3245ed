use rivalscope_core::db::{open_db_in_memory, DbError};
use rivalscope_core::{
    CompanySize, CompetitorCache, CompetitorDraft, CompetitorService, CompetitorStore, Metrics,
    RawRecord, SqliteCompetitorStore, StoreError, StoreResult,
};

const OWNER: &str = "user-1";

#[test]
fn add_then_load_surfaces_the_normalized_record() {
    let conn = open_db_in_memory().unwrap();
    let service = CompetitorService::new(SqliteCompetitorStore::new(&conn));

    let id = service.add_competitor(OWNER, &sample_draft("Acme")).unwrap();

    let competitors = service.load_competitors(OWNER);
    assert_eq!(competitors.len(), 1);
    assert_eq!(competitors[0].id, id);
    assert_eq!(competitors[0].name, "Acme");
    assert_eq!(competitors[0].metrics.monthly_visitors, 125_000.0);
    assert_eq!(competitors[0].user_id, OWNER);
    assert!(!competitors[0].created_at.is_empty());
}

#[test]
fn update_flow_refreshes_the_stored_record() {
    let conn = open_db_in_memory().unwrap();
    let service = CompetitorService::new(SqliteCompetitorStore::new(&conn));

    service.add_competitor(OWNER, &sample_draft("Acme")).unwrap();
    let mut competitor = service.load_competitors(OWNER).remove(0);
    let created_at = competitor.created_at.clone();

    competitor.name = "Acme Rebranded".to_string();
    competitor.size = CompanySize::Large;
    service.update_competitor(&competitor).unwrap();

    let reloaded = service.load_competitors(OWNER).remove(0);
    assert_eq!(reloaded.name, "Acme Rebranded");
    assert_eq!(reloaded.size, CompanySize::Large);
    assert_eq!(reloaded.created_at, created_at);
}

#[test]
fn failed_load_yields_an_empty_collection() {
    let service = CompetitorService::new(FailingStore);
    assert!(service.load_competitors(OWNER).is_empty());
}

#[test]
fn failed_write_reports_the_store_error() {
    let service = CompetitorService::new(FailingStore);
    let err = service
        .add_competitor(OWNER, &sample_draft("Acme"))
        .unwrap_err();
    assert!(matches!(err, StoreError::Db(_)));
}

#[test]
fn cache_replaces_contents_wholesale_on_each_completed_load() {
    let mut cache = CompetitorCache::new();

    let ticket = cache.begin_load();
    assert!(cache.complete_load(ticket, load_named(&["Acme", "Zenith"])));
    assert_eq!(cache.len(), 2);

    // A failed reload completes with an empty result: no stale merge.
    let ticket = cache.begin_load();
    assert!(cache.complete_load(ticket, Vec::new()));
    assert!(cache.is_empty());

    let ticket = cache.begin_load();
    assert!(cache.complete_load(ticket, load_named(&["Nadir"])));
    let names: Vec<&str> = cache.items().iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Nadir"]);
}

#[test]
fn stale_load_tickets_are_discarded() {
    let mut cache = CompetitorCache::new();

    let first = cache.begin_load();
    let second = cache.begin_load();

    // The older load finishing late must not clobber the newer one.
    assert!(!cache.complete_load(first, load_named(&["Stale"])));
    assert!(cache.is_empty());

    assert!(cache.complete_load(second, load_named(&["Current"])));
    assert_eq!(cache.items()[0].name, "Current");
}

#[test]
fn invalidate_discards_in_flight_loads_without_touching_contents() {
    let mut cache = CompetitorCache::new();

    let ticket = cache.begin_load();
    cache.complete_load(ticket, load_named(&["Kept"]));

    let in_flight = cache.begin_load();
    cache.invalidate(); // owning view unmounted

    assert!(!cache.complete_load(in_flight, load_named(&["Dropped"])));
    assert_eq!(cache.items()[0].name, "Kept");

    cache.clear();
    assert!(cache.is_empty());
}

/// Store stub whose every call fails, standing in for a network or auth
/// outage at the document service.
struct FailingStore;

impl CompetitorStore for FailingStore {
    fn list_for_owner(&self, _user_id: &str) -> StoreResult<Vec<RawRecord>> {
        Err(store_outage())
    }

    fn create(&self, _record: &RawRecord) -> StoreResult<String> {
        Err(store_outage())
    }

    fn update(&self, _id: &str, _record: &RawRecord) -> StoreResult<()> {
        Err(store_outage())
    }

    fn delete(&self, _id: &str) -> StoreResult<()> {
        Err(store_outage())
    }
}

fn store_outage() -> StoreError {
    StoreError::Db(DbError::Sqlite(rusqlite::Error::InvalidQuery))
}

fn sample_draft(name: &str) -> CompetitorDraft {
    CompetitorDraft {
        name: name.to_string(),
        website: format!("https://{}.example", name.to_lowercase()),
        industry: "Retail".to_string(),
        metrics: Metrics {
            monthly_visitors: 125_000.0,
            ..Metrics::default()
        },
        ..CompetitorDraft::default()
    }
}

fn load_named(names: &[&str]) -> Vec<rivalscope_core::Competitor> {
    names
        .iter()
        .map(|name| rivalscope_core::Competitor {
            id: format!("id-{name}"),
            name: (*name).to_string(),
            website: String::new(),
            description: String::new(),
            industry: String::new(),
            size: CompanySize::Startup,
            location: String::new(),
            logo_url: String::new(),
            social_media: Default::default(),
            metrics: Metrics::default(),
            products: Vec::new(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            last_updated: String::new(),
            user_id: OWNER.to_string(),
            created_at: String::new(),
        })
        .collect()
}
