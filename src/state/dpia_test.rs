use super::*;

fn complete_draft() -> DpiaDraft {
    DpiaDraft {
        project_name: "CRM migration".to_owned(),
        description: "Move customer records to the new CRM".to_owned(),
        data_categories: "Contact details\nContract history\n".to_owned(),
        processing_purpose: "Customer relationship management".to_owned(),
        risks: vec![
            DraftRisk { description: "Unencrypted export".to_owned(), likelihood: 2, impact: 5 },
            DraftRisk { description: "Excess retention".to_owned(), likelihood: 3, impact: 2 },
        ],
        mitigations: "Encrypt exports, purge after migration".to_owned(),
    }
}

// =============================================================
// Step machine
// =============================================================

#[test]
fn steps_are_ordered_and_indexed() {
    let all = WizardStep::all();
    for (position, step) in all.into_iter().enumerate() {
        assert_eq!(step.index(), position);
    }
}

#[test]
fn next_walks_forward_and_clamps_at_review() {
    assert_eq!(WizardStep::Project.next(), WizardStep::DataMapping);
    assert_eq!(WizardStep::Mitigations.next(), WizardStep::Review);
    assert_eq!(WizardStep::Review.next(), WizardStep::Review);
}

#[test]
fn prev_walks_backward_and_clamps_at_project() {
    assert_eq!(WizardStep::Review.prev(), WizardStep::Mitigations);
    assert_eq!(WizardStep::DataMapping.prev(), WizardStep::Project);
    assert_eq!(WizardStep::Project.prev(), WizardStep::Project);
}

// =============================================================
// Completeness gating
// =============================================================

#[test]
fn empty_draft_completes_no_step() {
    let draft = DpiaDraft::default();
    for step in WizardStep::all() {
        assert!(!draft.step_complete(step), "step {step:?} unexpectedly complete");
    }
}

#[test]
fn complete_draft_completes_every_step() {
    let draft = complete_draft();
    for step in WizardStep::all() {
        assert!(draft.step_complete(step), "step {step:?} unexpectedly incomplete");
    }
}

#[test]
fn whitespace_only_fields_do_not_complete_a_step() {
    let draft = DpiaDraft { project_name: "   ".to_owned(), ..complete_draft() };
    assert!(!draft.step_complete(WizardStep::Project));
    assert!(!draft.step_complete(WizardStep::Review));
}

#[test]
fn risks_step_requires_at_least_one_valid_risk() {
    let mut draft = complete_draft();
    draft.risks.clear();
    assert!(!draft.step_complete(WizardStep::Risks));

    draft.risks.push(DraftRisk { description: "Out of range".to_owned(), likelihood: 0, impact: 3 });
    assert!(!draft.step_complete(WizardStep::Risks));

    draft.risks[0].likelihood = 6;
    assert!(!draft.step_complete(WizardStep::Risks));
}

// =============================================================
// Scoring and submission
// =============================================================

#[test]
fn risk_score_is_worst_product() {
    assert_eq!(complete_draft().risk_score(), 10);
    assert_eq!(DpiaDraft::default().risk_score(), 0);
}

#[test]
fn submission_payload_splits_categories_and_trims() {
    let payload = complete_draft().submission_payload();
    assert_eq!(payload["projectName"], "CRM migration");
    assert_eq!(payload["dataCategories"], serde_json::json!(["Contact details", "Contract history"]));
    assert_eq!(payload["riskScore"], 10);
    assert_eq!(payload["risks"].as_array().map(Vec::len), Some(2));
}

#[test]
fn submission_payload_drops_invalid_risks() {
    let mut draft = complete_draft();
    draft.risks.push(DraftRisk { description: String::new(), likelihood: 3, impact: 3 });
    let payload = draft.submission_payload();
    assert_eq!(payload["risks"].as_array().map(Vec::len), Some(2));
}
