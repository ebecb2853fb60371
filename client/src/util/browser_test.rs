#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn confirm_is_false_without_a_browser() {
    assert!(!confirm("삭제하시겠습니까?"));
}

#[test]
fn download_text_reports_unavailable_on_server() {
    assert_eq!(download_text("a.txt", "body"), Err("download unavailable".to_owned()));
}

#[test]
fn today_iso_is_a_dashed_date() {
    let today = today_iso();
    assert_eq!(today.len(), 10);
    assert_eq!(today.as_bytes()[4], b'-');
    assert_eq!(today.as_bytes()[7], b'-');
}

#[test]
fn clock_now_falls_back_to_just_now() {
    assert_eq!(clock_now(), crate::state::chat::JUST_NOW);
}
