use sentinel::store::{LOCAL_AUTHOR, ReportStore};
use sentinel::types::{Category, ReportDraft, ReportStatus, Severity};
use std::collections::HashSet;
use time::OffsetDateTime;

fn draft(n: usize) -> ReportDraft {
    ReportDraft {
        title: format!("Report {n}"),
        description: "Water main leaking".to_string(),
        category: Category::Infrastructure,
        severity: Severity::Medium,
        location: "Avondale".to_string(),
    }
}

#[test]
fn created_reports_have_unique_ids_and_defaults() {
    let mut store = ReportStore::seeded();
    let now = OffsetDateTime::now_utc();

    // Same instant for every report: ids must still differ.
    let created: Vec<_> = (0..20).map(|n| store.create_at(draft(n), now)).collect();

    let listed = store.list();
    let ids: HashSet<&str> = listed.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), 25);
    for report in &created {
        assert_eq!(report.status, ReportStatus::Open);
        assert_eq!(report.votes, 0);
        assert_eq!(report.author, LOCAL_AUTHOR);
    }
}

#[test]
fn newest_report_comes_first() {
    let mut store = ReportStore::seeded();
    let seed_count = store.len();

    for n in 0..3 {
        store.create(draft(n));
    }

    let reports = store.list();
    assert_eq!(reports.len(), seed_count + 3);
    assert_eq!(reports[0].title, "Report 2");
    assert_eq!(reports[1].title, "Report 1");
    assert_eq!(reports[2].title, "Report 0");
    assert_eq!(reports[3].title, "ZESA Transformer Fault");
}

#[test]
fn empty_store_grows_from_nothing() {
    let mut store = ReportStore::empty();
    assert!(store.is_empty());
    let report = store.create(draft(1));
    assert_eq!(store.list().as_ref(), &[report]);
}
