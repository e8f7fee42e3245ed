//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `rivalscope_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use rivalscope_core::db::open_db_in_memory;
use rivalscope_core::stats::aggregate;
use rivalscope_core::stats::format::format_number;
use rivalscope_core::{CompetitorDraft, CompetitorService, Metrics, SqliteCompetitorStore};

fn main() {
    println!("rivalscope_core version={}", rivalscope_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open in-memory store: {err}");
            std::process::exit(1);
        }
    };
    let service = CompetitorService::new(SqliteCompetitorStore::new(&conn));

    let draft = CompetitorDraft {
        name: "Acme Corp".to_string(),
        website: "https://acme.example".to_string(),
        industry: "Retail".to_string(),
        metrics: Metrics {
            monthly_visitors: 125_000.0,
            growth_rate: 4.2,
            ..Metrics::default()
        },
        ..CompetitorDraft::default()
    };

    if let Err(err) = service.add_competitor("smoke-user", &draft) {
        eprintln!("seed write failed: {err}");
        std::process::exit(1);
    }

    let competitors = service.load_competitors("smoke-user");
    println!("competitors tracked={}", aggregate::total_count(&competitors));
    println!(
        "combined monthly visitors={}",
        format_number(aggregate::total_monthly_visitors(&competitors))
    );
    println!(
        "average growth rate={:.1}%",
        aggregate::average_growth_rate(&competitors)
    );
}
