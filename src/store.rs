use crate::ids::IdGenerator;
use crate::seed::initial_reports;
use crate::types::{Report, ReportDraft, ReportStatus};
use std::sync::Arc;
use time::OffsetDateTime;

pub const LOCAL_AUTHOR: &str = "You";

/// Prepend-only log of reports, most recent first.
///
/// Every mutation swaps in a fresh snapshot, so a slice returned by
/// [`ReportStore::list`] never changes under its holder.
#[derive(Clone, Debug)]
pub struct ReportStore {
    reports: Arc<[Report]>,
    ids: IdGenerator,
    author: String,
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ReportStore {
    pub fn with_reports(reports: Vec<Report>) -> Self {
        // Keep fresh ids clear of any numeric seed id.
        let floor = reports
            .iter()
            .filter_map(|report| report.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            reports: reports.into(),
            ids: IdGenerator::starting_after(floor),
            author: LOCAL_AUTHOR.to_string(),
        }
    }

    pub fn seeded() -> Self {
        Self::with_reports(initial_reports(OffsetDateTime::now_utc()))
    }

    pub fn empty() -> Self {
        Self::with_reports(Vec::new())
    }

    pub fn create(&mut self, draft: ReportDraft) -> Report {
        self.create_at(draft, OffsetDateTime::now_utc())
    }

    pub fn create_at(&mut self, draft: ReportDraft, now: OffsetDateTime) -> Report {
        let report = Report {
            id: self.ids.next_at(now),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            severity: draft.severity,
            location: draft.location,
            timestamp: now,
            votes: 0,
            status: ReportStatus::Open,
            author: self.author.clone(),
        };

        let mut next = Vec::with_capacity(self.reports.len() + 1);
        next.push(report.clone());
        next.extend_from_slice(&self.reports);
        self.reports = next.into();

        tracing::info!(id = %report.id, category = %report.category, severity = %report.severity, "report created");
        report
    }

    pub fn list(&self) -> Arc<[Report]> {
        Arc::clone(&self.reports)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Severity};
    use time::macros::datetime;

    fn draft(title: &str) -> ReportDraft {
        ReportDraft {
            title: title.to_string(),
            description: "Streetlight out".to_string(),
            category: Category::Infrastructure,
            severity: Severity::Low,
            location: "Fife St".to_string(),
        }
    }

    #[test]
    fn seeded_store_has_sample_reports() {
        let store = ReportStore::seeded();
        assert_eq!(store.len(), 5);
        assert_eq!(store.list()[0].title, "ZESA Transformer Fault");
    }

    #[test]
    fn create_assigns_defaults() {
        let mut store = ReportStore::empty();
        let now = datetime!(2025-06-01 12:00:00 UTC);
        let report = store.create_at(draft("Dark street"), now);

        assert_eq!(report.status, ReportStatus::Open);
        assert_eq!(report.votes, 0);
        assert_eq!(report.author, LOCAL_AUTHOR);
        assert_eq!(report.timestamp, now);
    }

    #[test]
    fn old_snapshot_is_not_mutated() {
        let mut store = ReportStore::seeded();
        let before = store.list();
        store.create(draft("Dark street"));
        assert_eq!(before.len(), 5);
        assert_eq!(store.list().len(), 6);
    }

    #[test]
    fn fresh_ids_skip_numeric_seed_ids() {
        let mut store = ReportStore::seeded();
        let report = store.create_at(draft("Early"), OffsetDateTime::UNIX_EPOCH);
        assert_eq!(report.id, "6");
    }
}
