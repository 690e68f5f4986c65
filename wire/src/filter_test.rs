use super::*;

#[test]
fn default_filter_has_no_pairs() {
    let filter = ChallengeFilter::default();
    assert!(filter.query_pairs().is_empty());
    assert!(filter.is_empty());
}

#[test]
fn all_fields_emit_in_stable_order() {
    let filter = ChallengeFilter {
        category: Some(Category::Health),
        difficulty: Some(Difficulty::Beginner),
        status: Some(ChallengeStatus::Active),
        search: Some("  water ".to_owned()),
    };
    assert_eq!(
        filter.query_pairs(),
        vec![
            ("category", "health".to_owned()),
            ("difficulty", "beginner".to_owned()),
            ("status", "active".to_owned()),
            ("search", "water".to_owned()),
        ]
    );
}

#[test]
fn blank_search_is_dropped() {
    let filter = ChallengeFilter { search: Some("   ".to_owned()), ..ChallengeFilter::default() };
    assert!(filter.is_empty());
}
