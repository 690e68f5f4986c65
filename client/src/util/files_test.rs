use super::*;

#[test]
fn human_size_picks_unit() {
    assert_eq!(human_size(512), "512 B");
    assert_eq!(human_size(1536), "1.5 KB");
    assert_eq!(human_size(5 * 1024 * 1024), "5.0 MB");
}

#[test]
fn accept_filter_lists_documents() {
    assert!(ACCEPT.contains(".pdf"));
}
