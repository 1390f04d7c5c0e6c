//! Tests for pagination module

use super::*;
use crate::parse::{ParsedPage, ResponseParser};

fn page(body: &str) -> ParsedPage {
    ResponseParser::new(false).parse(body)
}

// ============================================================================
// NextPage Tests
// ============================================================================

#[test]
fn test_next_page_with_param() {
    let next = NextPage::with_param("l", "10");
    let NextPage::Continue { query_params, url } = next else {
        panic!("Expected Continue");
    };
    assert_eq!(query_params.get("l"), Some(&"10".to_string()));
    assert!(url.is_none());
}

#[test]
fn test_next_page_with_url() {
    let next = NextPage::with_url("https://ip.thc.org/sb/example.com?p=2");
    let NextPage::Continue { query_params, url } = next else {
        panic!("Expected Continue");
    };
    assert!(query_params.is_empty());
    assert_eq!(
        url,
        Some("https://ip.thc.org/sb/example.com?p=2".to_string())
    );
}

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_pagination_state_records_size() {
    let mut state = PaginationState::new();
    assert!(state.last_size.is_none());

    state.record_size(50);
    assert_eq!(state.last_size, Some(50));
}

// ============================================================================
// NextLinkAdvance Tests
// ============================================================================

#[test]
fn test_next_link_follows_link() {
    let mut state = PaginationState::new();
    let parsed = page(";;Entries: 100/300\n;;Next Page: https://ip.thc.org/1.1.1.1?p=2\na.com");

    let next = NextLinkAdvance.next_page(&parsed, &mut state);

    assert_eq!(next, NextPage::with_url("https://ip.thc.org/1.1.1.1?p=2"));
    assert!(state.last_size.is_none());
}

#[test]
fn test_next_link_done_without_link() {
    let mut state = PaginationState::new();
    let parsed = page(";;Entries: 2/10\na.com\nb.com");

    let next = NextLinkAdvance.next_page(&parsed, &mut state);

    assert_eq!(next, NextPage::Done);
}

// ============================================================================
// EnlargedSizeAdvance Tests
// ============================================================================

#[test]
fn test_enlarged_size_requests_total() {
    let mut state = PaginationState::new();
    let parsed = page(";;Entries: 2/10\na.com\nb.com");

    let next = EnlargedSizeAdvance::default().next_page(&parsed, &mut state);

    assert_eq!(next, NextPage::with_param("l", "10"));
    assert_eq!(state.last_size, Some(10));
}

#[test]
fn test_enlarged_size_custom_param() {
    let mut state = PaginationState::new();
    let parsed = page(";;Entries: 1/3\na.com");

    let next = EnlargedSizeAdvance::new("limit").next_page(&parsed, &mut state);

    assert_eq!(next, NextPage::with_param("limit", "3"));
}

#[test]
fn test_enlarged_size_done_when_complete() {
    let mut state = PaginationState::new();

    let complete = page(";;Entries: 10/10\na.com");
    assert_eq!(
        EnlargedSizeAdvance::default().next_page(&complete, &mut state),
        NextPage::Done
    );

    let mut state = PaginationState::new();
    let unknown = page("a.com\nb.com");
    assert_eq!(
        EnlargedSizeAdvance::default().next_page(&unknown, &mut state),
        NextPage::Done
    );
    assert!(state.last_size.is_none());
}

#[test]
fn test_enlarged_size_stops_when_total_stops_growing() {
    let advance = EnlargedSizeAdvance::default();
    let mut state = PaginationState::new();

    let first = page(";;Entries: 100/5000\na.com");
    assert_eq!(
        advance.next_page(&first, &mut state),
        NextPage::with_param("l", "5000")
    );

    // Service capped the re-request and reports the same total again
    let capped = page(";;Entries: 100/5000\na.com");
    assert_eq!(advance.next_page(&capped, &mut state), NextPage::Done);
}

#[test]
fn test_enlarged_size_follows_a_growing_total() {
    let advance = EnlargedSizeAdvance::default();
    let mut state = PaginationState::new();

    advance.next_page(&page(";;Entries: 2/10\na.com"), &mut state);
    let grown = page(";;Entries: 10/12\na.com");
    assert_eq!(
        advance.next_page(&grown, &mut state),
        NextPage::with_param("l", "12")
    );
    assert_eq!(state.last_size, Some(12));
}

// ============================================================================
// LinkThenSizeAdvance Tests
// ============================================================================

#[test]
fn test_link_takes_precedence() {
    let mut state = PaginationState::new();
    let parsed = page(";;Entries: 2/10\n;;Next Page: https://ip.thc.org/x?p=2\na.com");

    let next = LinkThenSizeAdvance::default().next_page(&parsed, &mut state);

    assert_eq!(next, NextPage::with_url("https://ip.thc.org/x?p=2"));
    assert!(state.last_size.is_none());
}

#[test]
fn test_falls_back_to_size() {
    let mut state = PaginationState::new();
    let parsed = page(";;Entries: 2/10\na.com\nb.com");

    let next = LinkThenSizeAdvance::default().next_page(&parsed, &mut state);

    assert_eq!(next, NextPage::with_param(DEFAULT_SIZE_PARAM, "10"));
}

#[test]
fn test_done_when_nothing_left() {
    let mut state = PaginationState::new();
    let parsed = page(";;Entries: 5/5\na.com");

    let next = LinkThenSizeAdvance::new("l").next_page(&parsed, &mut state);

    assert_eq!(next, NextPage::Done);
}

#[test]
fn test_default_cap() {
    assert_eq!(DEFAULT_MAX_PAGES, 100);
}
