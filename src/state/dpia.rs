//! DPIA wizard draft model and step machine.
//!
//! DESIGN
//! ======
//! The wizard is a closed sequence of steps with forward gating: a step must
//! be complete before the next one opens, while backward navigation is always
//! free. The draft serializes to JSON so `util::prefs` can persist it across
//! reloads until submission.

#[cfg(test)]
#[path = "dpia_test.rs"]
mod dpia_test;

use serde::{Deserialize, Serialize};

/// Storage key for the persisted wizard draft.
pub const DRAFT_KEY: &str = "pdpl.dpiaDraft";

/// Wizard steps in completion order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    Project,
    DataMapping,
    Risks,
    Mitigations,
    Review,
}

impl WizardStep {
    /// All steps in order.
    pub fn all() -> [WizardStep; 5] {
        [
            WizardStep::Project,
            WizardStep::DataMapping,
            WizardStep::Risks,
            WizardStep::Mitigations,
            WizardStep::Review,
        ]
    }

    /// Zero-based position in the sequence.
    pub fn index(self) -> usize {
        match self {
            WizardStep::Project => 0,
            WizardStep::DataMapping => 1,
            WizardStep::Risks => 2,
            WizardStep::Mitigations => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Project => "Project",
            WizardStep::DataMapping => "Data mapping",
            WizardStep::Risks => "Risks",
            WizardStep::Mitigations => "Mitigations",
            WizardStep::Review => "Review",
        }
    }

    /// Following step; the last step stays put.
    pub fn next(self) -> WizardStep {
        match self {
            WizardStep::Project => WizardStep::DataMapping,
            WizardStep::DataMapping => WizardStep::Risks,
            WizardStep::Risks => WizardStep::Mitigations,
            WizardStep::Mitigations | WizardStep::Review => WizardStep::Review,
        }
    }

    /// Preceding step; the first step stays put.
    pub fn prev(self) -> WizardStep {
        match self {
            WizardStep::Project | WizardStep::DataMapping => WizardStep::Project,
            WizardStep::Risks => WizardStep::DataMapping,
            WizardStep::Mitigations => WizardStep::Risks,
            WizardStep::Review => WizardStep::Mitigations,
        }
    }
}

/// One identified risk in the draft.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftRisk {
    pub description: String,
    /// Likelihood 1..=5.
    pub likelihood: u8,
    /// Impact 1..=5.
    pub impact: u8,
}

impl DraftRisk {
    pub fn is_valid(&self) -> bool {
        !self.description.trim().is_empty()
            && (1..=5).contains(&self.likelihood)
            && (1..=5).contains(&self.impact)
    }
}

/// The in-progress DPIA, one field group per wizard step.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DpiaDraft {
    pub project_name: String,
    pub description: String,
    /// Categories of personal data touched, one per line.
    pub data_categories: String,
    pub processing_purpose: String,
    pub risks: Vec<DraftRisk>,
    pub mitigations: String,
}

impl DpiaDraft {
    /// Whether the fields a step collects are filled in.
    pub fn step_complete(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Project => {
                !self.project_name.trim().is_empty() && !self.description.trim().is_empty()
            }
            WizardStep::DataMapping => {
                !self.data_categories.trim().is_empty()
                    && !self.processing_purpose.trim().is_empty()
            }
            WizardStep::Risks => !self.risks.is_empty() && self.risks.iter().all(DraftRisk::is_valid),
            WizardStep::Mitigations => !self.mitigations.trim().is_empty(),
            WizardStep::Review => WizardStep::all()
                .into_iter()
                .filter(|s| *s != WizardStep::Review)
                .all(|s| self.step_complete(s)),
        }
    }

    /// Overall risk score 1..=25: the worst likelihood x impact product, or 0
    /// with no risks recorded.
    pub fn risk_score(&self) -> u8 {
        self.risks
            .iter()
            .filter(|risk| risk.is_valid())
            .map(|risk| risk.likelihood * risk.impact)
            .max()
            .unwrap_or(0)
    }

    /// Submission body for `POST /dpia`.
    pub fn submission_payload(&self) -> serde_json::Value {
        let categories: Vec<&str> = self
            .data_categories
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        serde_json::json!({
            "projectName": self.project_name.trim(),
            "description": self.description.trim(),
            "dataCategories": categories,
            "processingPurpose": self.processing_purpose.trim(),
            "risks": self.risks.iter().filter(|r| r.is_valid()).map(|r| serde_json::json!({
                "description": r.description.trim(),
                "likelihood": r.likelihood,
                "impact": r.impact,
            })).collect::<Vec<_>>(),
            "mitigations": self.mitigations.trim(),
            "riskScore": self.risk_score(),
        })
    }
}
