use super::*;

#[test]
fn status_class_is_distinct_per_status() {
    let classes = [
        status_class(DpiaStatus::Draft),
        status_class(DpiaStatus::Submitted),
        status_class(DpiaStatus::InReview),
        status_class(DpiaStatus::Approved),
        status_class(DpiaStatus::Rejected),
    ];
    for (i, a) in classes.iter().enumerate() {
        for (j, b) in classes.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}
