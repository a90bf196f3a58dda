use crate::types::{Classification, ReportDraft};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormPhase {
    #[default]
    Editing,
    Analyzing,
    Reviewing(Classification),
}

/// An analysis started by [`ReportForm::begin_analysis`]. Its result only
/// applies while the form is still on the same generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisTicket {
    pub generation: u64,
    pub description: String,
}

/// State of the "new report" form: describe, analyze, review, submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportForm {
    description: String,
    location: String,
    phase: FormPhase,
    generation: u64,
}

impl ReportForm {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.phase, FormPhase::Analyzing)
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn can_analyze(&self) -> bool {
        matches!(self.phase, FormPhase::Editing) && !self.description.trim().is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Move to `Analyzing` and return the description to classify.
    pub fn begin_analysis(&mut self) -> Option<AnalysisTicket> {
        if !self.can_analyze() {
            return None;
        }
        self.phase = FormPhase::Analyzing;
        self.generation += 1;
        Some(AnalysisTicket {
            generation: self.generation,
            description: self.description.clone(),
        })
    }

    /// Apply a finished analysis. Results from an earlier generation, or
    /// arriving outside `Analyzing`, are dropped and `false` is returned.
    pub fn complete_analysis(&mut self, generation: u64, classification: Classification) -> bool {
        if !self.is_analyzing() || generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "stale analysis result dropped"
            );
            return false;
        }
        self.phase = FormPhase::Reviewing(classification);
        true
    }

    pub fn suggestion(&self) -> Option<&Classification> {
        match &self.phase {
            FormPhase::Reviewing(classification) => Some(classification),
            _ => None,
        }
    }

    pub fn suggestion_mut(&mut self) -> Option<&mut Classification> {
        match &mut self.phase {
            FormPhase::Reviewing(classification) => Some(classification),
            _ => None,
        }
    }

    /// Back to editing, discarding the suggestion.
    pub fn edit(&mut self) {
        if matches!(self.phase, FormPhase::Reviewing(_)) {
            self.phase = FormPhase::Editing;
        }
    }

    pub fn can_submit(&self) -> bool {
        self.suggestion().is_some() && !self.location.trim().is_empty()
    }

    /// Yield the finished draft and clear the form.
    pub fn submit(&mut self) -> Option<ReportDraft> {
        if !self.can_submit() {
            return None;
        }
        let cleared = self.cleared();
        let form = std::mem::replace(self, cleared);
        let FormPhase::Reviewing(classification) = form.phase else {
            return None;
        };
        Some(ReportDraft {
            title: classification.title,
            description: form.description,
            category: classification.category,
            severity: classification.severity,
            location: form.location,
        })
    }

    pub fn reset(&mut self) {
        *self = self.cleared();
    }

    /// Empty form that keeps the generation counter, so results of analyses
    /// started before the clear never match again.
    fn cleared(&self) -> Self {
        Self {
            generation: self.generation,
            ..Self::default()
        }
    }
}
