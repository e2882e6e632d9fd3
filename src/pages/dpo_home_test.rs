use super::*;

fn record(id: &str, status: DpiaStatus, risk_score: u8) -> DpiaRecord {
    DpiaRecord {
        id: id.to_owned(),
        project_name: format!("Project {id}"),
        status,
        risk_score,
        submitted_at: None,
    }
}

#[test]
fn review_queue_keeps_only_records_awaiting_review() {
    let queue = review_queue(vec![
        record("d-1", DpiaStatus::Draft, 5),
        record("d-2", DpiaStatus::Submitted, 8),
        record("d-3", DpiaStatus::Approved, 20),
        record("d-4", DpiaStatus::InReview, 12),
        record("d-5", DpiaStatus::Rejected, 25),
    ]);
    let ids: Vec<&str> = queue.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["d-4", "d-2"]);
}

#[test]
fn review_queue_sorts_worst_risk_first() {
    let queue = review_queue(vec![
        record("d-1", DpiaStatus::Submitted, 4),
        record("d-2", DpiaStatus::Submitted, 25),
        record("d-3", DpiaStatus::InReview, 12),
    ]);
    let scores: Vec<u8> = queue.iter().map(|r| r.risk_score).collect();
    assert_eq!(scores, vec![25, 12, 4]);
}

#[test]
fn review_queue_of_settled_records_is_empty() {
    let queue = review_queue(vec![
        record("d-1", DpiaStatus::Approved, 9),
        record("d-2", DpiaStatus::Draft, 3),
    ]);
    assert!(queue.is_empty());
}
