use crate::ai::{LanguageModel, model_from_config};
use crate::analyst::{AnalystChat, PendingTurn, TurnOutcome};
use crate::classifier::IncidentClassifier;
use crate::config::AiConfig;
use crate::form::{AnalysisTicket, ReportForm};
use crate::prompts::Region;
use crate::store::ReportStore;
use crate::types::{ChatMessage, Classification, Report};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Feed,
    Report,
    Analyst,
}

/// Immutable view of the whole application, published after every change.
#[derive(Clone, Debug, PartialEq)]
pub struct AppSnapshot {
    pub tab: Tab,
    pub reports: Arc<[Report]>,
    pub form: ReportForm,
    pub chat: Arc<[ChatMessage]>,
    pub chat_pending: bool,
}

/// Classification request detached from the controller so it can run
/// while the controller keeps serving reads.
pub struct AnalysisJob {
    classifier: IncidentClassifier,
    ticket: AnalysisTicket,
}

impl AnalysisJob {
    pub fn description(&self) -> &str {
        &self.ticket.description
    }

    pub async fn run(self) -> AnalysisOutcome {
        let classification = self.classifier.classify(&self.ticket.description).await;
        AnalysisOutcome {
            generation: self.ticket.generation,
            classification,
        }
    }
}

/// Finished analysis, tagged with the form generation that requested it.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisOutcome {
    generation: u64,
    pub classification: Classification,
}

/// Owns every piece of application state. Observers call
/// [`AppController::subscribe`] and re-derive their view from each snapshot.
pub struct AppController {
    tab: Tab,
    store: ReportStore,
    form: ReportForm,
    classifier: IncidentClassifier,
    analyst: AnalystChat,
    updates: watch::Sender<AppSnapshot>,
}

impl AppController {
    pub fn new(model: Arc<dyn LanguageModel>, region: Region) -> Self {
        Self::with_store(model, region, ReportStore::seeded())
    }

    pub fn with_store(model: Arc<dyn LanguageModel>, region: Region, store: ReportStore) -> Self {
        let classifier = IncidentClassifier::new(Arc::clone(&model), region);
        let analyst = AnalystChat::new(model, region);
        let form = ReportForm::default();
        let initial = AppSnapshot {
            tab: Tab::default(),
            reports: store.list(),
            form: form.clone(),
            chat: analyst.messages().into(),
            chat_pending: false,
        };
        let (updates, _) = watch::channel(initial);
        Self {
            tab: Tab::default(),
            store,
            form,
            classifier,
            analyst,
            updates,
        }
    }

    pub fn from_config(config: &AiConfig) -> Self {
        Self::new(model_from_config(config), Region::default())
    }

    pub fn subscribe(&self) -> watch::Receiver<AppSnapshot> {
        self.updates.subscribe()
    }

    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            tab: self.tab,
            reports: self.store.list(),
            form: self.form.clone(),
            chat: self.analyst.messages().into(),
            chat_pending: self.analyst.is_pending(),
        }
    }

    fn publish(&self) {
        self.updates.send_replace(self.snapshot());
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn reports(&self) -> Arc<[Report]> {
        self.store.list()
    }

    pub fn form(&self) -> &ReportForm {
        &self.form
    }

    pub fn analyst(&self) -> &AnalystChat {
        &self.analyst
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.publish();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.set_description(description);
        self.publish();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.form.set_location(location);
        self.publish();
    }

    /// Apply a user edit to the suggestion under review.
    pub fn update_suggestion(&mut self, edit: impl FnOnce(&mut Classification)) {
        if let Some(suggestion) = self.form.suggestion_mut() {
            edit(suggestion);
            self.publish();
        }
    }

    pub fn edit_suggestion(&mut self) {
        self.form.edit();
        self.publish();
    }

    pub fn begin_analysis(&mut self) -> Option<AnalysisJob> {
        let ticket = self.form.begin_analysis()?;
        self.publish();
        Some(AnalysisJob {
            classifier: self.classifier.clone(),
            ticket,
        })
    }

    /// Apply a finished analysis. Returns `false` when the form has moved on
    /// (cancelled, submitted or re-analyzed) since the job started.
    pub fn complete_analysis(&mut self, outcome: AnalysisOutcome) -> bool {
        let applied = self
            .form
            .complete_analysis(outcome.generation, outcome.classification);
        if applied {
            self.publish();
        }
        applied
    }

    /// Analyze the current description. Returns `false` if analysis was not
    /// possible (blank description or already running).
    pub async fn analyze_report(&mut self) -> bool {
        let Some(job) = self.begin_analysis() else {
            return false;
        };
        let outcome = job.run().await;
        self.complete_analysis(outcome)
    }

    /// File the reviewed report and return to the feed.
    pub fn submit_report(&mut self) -> Option<Report> {
        let draft = self.form.submit()?;
        let report = self.store.create(draft);
        self.tab = Tab::Feed;
        self.publish();
        Some(report)
    }

    pub fn cancel_report(&mut self) {
        self.form.reset();
        self.tab = Tab::Feed;
        self.publish();
    }

    pub fn begin_chat_turn(&mut self, input: &str) -> Option<PendingTurn> {
        let reports = self.store.list();
        let turn = self.analyst.begin_turn(input, &reports)?;
        self.publish();
        Some(turn)
    }

    pub fn finish_chat_turn(&mut self, outcome: TurnOutcome) {
        if self.analyst.finish_turn(outcome) {
            self.publish();
        }
    }

    /// Append the apology for a chat turn that was dropped mid-flight.
    pub fn settle_abandoned_chat_turn(&mut self) {
        if self.analyst.settle_abandoned_turn() {
            self.publish();
        }
    }

    pub async fn send_chat(&mut self, input: &str) -> bool {
        let Some(turn) = self.begin_chat_turn(input) else {
            return false;
        };
        let outcome = turn.resolve().await;
        self.finish_chat_turn(outcome);
        true
    }
}
