use super::*;
use serde_json::json;

fn notice(title: &str, content: &str, systems: &[&str]) -> Notice {
    Notice {
        id: "n1".to_owned(),
        title: title.to_owned(),
        date: "2025-01-15".to_owned(),
        content: content.to_owned(),
        systems: systems.iter().map(|s| (*s).to_owned()).collect(),
        created_at: String::new(),
        updated_at: String::new(),
    }
}

// =============================================================
// Notice
// =============================================================

#[test]
fn notice_deserializes_backend_record() {
    let raw = json!({
        "id": "abc",
        "title": "정기 전산 업데이트(2025.01.15)",
        "content": "■ 요약",
        "created_at": "2025-01-15T09:00:00.000001",
        "updated_at": "2025-01-15T09:00:00.000001",
        "systems": ["넷오피스", "OneTeam"],
        "date": "2025-01-15"
    });
    let parsed: Notice = serde_json::from_value(raw).unwrap();
    assert_eq!(parsed.id, "abc");
    assert_eq!(parsed.systems, vec!["넷오피스".to_owned(), "OneTeam".to_owned()]);
}

#[test]
fn notice_list_defaults_to_empty() {
    let parsed: NoticeList = serde_json::from_value(json!({})).unwrap();
    assert!(parsed.notices.is_empty());
}

#[test]
fn notice_matches_title_or_content_case_insensitively() {
    let n = notice("Network Maintenance", "DB patch tonight", &["넷오피스"]);
    assert!(n.matches("network", ""));
    assert!(n.matches("db patch", ""));
    assert!(!n.matches("erp", ""));
}

#[test]
fn notice_matches_requires_system_when_filtered() {
    let n = notice("Network Maintenance", "", &["넷오피스"]);
    assert!(n.matches("network", "넷오피스"));
    assert!(!n.matches("network", "OneTeam"));
    assert!(!n.matches("missing", "넷오피스"));
}

// =============================================================
// ChatResponse
// =============================================================

#[test]
fn chat_response_success_without_notice() {
    let parsed: ChatResponse =
        serde_json::from_value(json!({ "success": true, "message": "안녕하세요", "notice_generated": false, "notice": null }))
            .unwrap();
    assert_eq!(
        parsed.into_reply(),
        Ok(ChatReply { message: "안녕하세요".to_owned(), notice: None })
    );
}

#[test]
fn chat_response_success_with_generated_notice() {
    let parsed: ChatResponse = serde_json::from_value(json!({
        "success": true,
        "message": "공지를 만들었습니다",
        "notice_generated": true,
        "notice": { "id": "x", "title": "제목", "content": "본문", "systems": [] }
    }))
    .unwrap();
    let reply = parsed.into_reply().unwrap();
    assert_eq!(reply.notice, Some(NoticeDraft { title: "제목".to_owned(), content: "본문".to_owned() }));
}

#[test]
fn chat_response_ignores_notice_without_flag() {
    let parsed: ChatResponse = serde_json::from_value(json!({
        "success": true,
        "message": "m",
        "notice": { "title": "t", "content": "c" }
    }))
    .unwrap();
    assert_eq!(parsed.into_reply().unwrap().notice, None);
}

#[test]
fn chat_response_http_error_detail_becomes_rejection() {
    let parsed: ChatResponse = serde_json::from_value(json!({ "detail": "채팅 처리 중 오류: boom" })).unwrap();
    assert_eq!(parsed.into_reply(), Err(ApiError::Rejected("채팅 처리 중 오류: boom".to_owned())));
}

#[test]
fn chat_response_failure_without_detail_uses_default_message() {
    let parsed: ChatResponse = serde_json::from_value(json!({ "success": false })).unwrap();
    assert_eq!(parsed.into_reply(), Err(ApiError::Rejected("메시지 전송 실패".to_owned())));
}

// =============================================================
// Ack / GenerateResponse
// =============================================================

#[test]
fn ack_success_carries_message() {
    let parsed: Ack = serde_json::from_value(json!({ "success": true, "message": "공지가 삭제되었습니다." })).unwrap();
    assert_eq!(parsed.into_result("삭제 실패"), Ok(Some("공지가 삭제되었습니다.".to_owned())));
}

#[test]
fn ack_not_found_detail_is_rejection() {
    let parsed: Ack = serde_json::from_value(json!({ "detail": "공지를 찾을 수 없습니다." })).unwrap();
    assert_eq!(
        parsed.into_result("삭제 실패"),
        Err(ApiError::Rejected("공지를 찾을 수 없습니다.".to_owned()))
    );
}

#[test]
fn generate_response_requires_text() {
    let ok: GenerateResponse = serde_json::from_value(json!({ "success": true, "notice": "본문" })).unwrap();
    assert_eq!(ok.into_text(), Ok("본문".to_owned()));

    let empty: GenerateResponse = serde_json::from_value(json!({ "success": true })).unwrap();
    assert_eq!(empty.into_text(), Err(ApiError::Rejected("공지 생성에 실패했습니다.".to_owned())));

    let failed: GenerateResponse =
        serde_json::from_value(json!({ "success": false, "message": "API 한도 초과" })).unwrap();
    assert_eq!(failed.into_text(), Err(ApiError::Rejected("API 한도 초과".to_owned())));
}

// =============================================================
// TemplateStructure
// =============================================================

#[test]
fn template_structure_accepts_names_and_objects() {
    let parsed: TemplateStructure = serde_json::from_value(json!({
        "systems": ["넷오피스", { "name": "OneTeam", "code": "ot" }],
        "tag_types": ["긴급"]
    }))
    .unwrap();
    let names: Vec<&str> = parsed.systems.iter().map(SystemEntry::name).collect();
    assert_eq!(names, vec!["넷오피스", "OneTeam"]);
}
