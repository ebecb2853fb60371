use super::*;

fn notice(id: &str, title: &str, content: &str, systems: &[&str]) -> Notice {
    Notice {
        id: id.to_owned(),
        title: title.to_owned(),
        date: "2025-01-15".to_owned(),
        content: content.to_owned(),
        systems: systems.iter().map(|s| (*s).to_owned()).collect(),
        created_at: "2025-01-15T09:00:00".to_owned(),
        updated_at: "2025-01-15T09:00:00".to_owned(),
    }
}

fn sample() -> Vec<Notice> {
    vec![
        notice("1", "정기 전산 업데이트", "DB 패치 적용", &["넷오피스"]),
        notice("2", "Network Outage", "라우터 교체", &["OneTeam", "넷오피스"]),
        notice("3", "E-Commerce 점검", "결제 모듈 network 설정 변경", &["E-Commerce"]),
    ]
}

fn ids(items: &[Notice]) -> Vec<&str> {
    items.iter().map(|n| n.id.as_str()).collect()
}

// =============================================================
// filter_notices
// =============================================================

#[test]
fn empty_filters_return_everything() {
    let items = sample();
    assert_eq!(ids(&filter_notices(&items, "", "")), vec!["1", "2", "3"]);
}

#[test]
fn search_matches_title_or_content_case_insensitively() {
    let items = sample();
    let found = filter_notices(&items, "NETWORK", "");
    assert_eq!(ids(&found), vec!["2", "3"]);
    for n in &found {
        let hit = n.title.to_lowercase().contains("network") || n.content.to_lowercase().contains("network");
        assert!(hit);
    }
}

#[test]
fn search_and_system_filter_intersect() {
    let items = sample();
    assert_eq!(ids(&filter_notices(&items, "network", "넷오피스")), vec!["2"]);
    assert_eq!(ids(&filter_notices(&items, "", "넷오피스")), vec!["1", "2"]);
    assert!(filter_notices(&items, "network", "Smart DERP/POS").is_empty());
}

#[test]
fn filter_on_empty_collection_is_empty() {
    assert!(filter_notices(&[], "anything", "").is_empty());
}

// =============================================================
// EditForm
// =============================================================

#[test]
fn edit_form_copies_cached_notice() {
    let n = notice("7", "제목", "본문", &["OneTeam"]);
    let form = EditForm::from_notice(&n);
    assert_eq!(form.id, "7");
    assert_eq!(form.systems, vec!["OneTeam".to_owned()]);
}

#[test]
fn validate_builds_put_body_with_comma_joined_systems() {
    let form = EditForm {
        id: "7".to_owned(),
        title: "제목".to_owned(),
        date: "2025-02-01".to_owned(),
        content: "본문".to_owned(),
        systems: vec!["넷오피스".to_owned(), "OneTeam".to_owned()],
    };
    assert_eq!(
        form.validate(),
        Ok(vec![
            ("title", "제목".to_owned()),
            ("date", "2025-02-01".to_owned()),
            ("content", "본문".to_owned()),
            ("systems", "넷오피스,OneTeam".to_owned()),
        ])
    );
}

#[test]
fn validate_rejects_any_blank_field_or_no_systems() {
    let valid = EditForm {
        id: "7".to_owned(),
        title: "t".to_owned(),
        date: "2025-02-01".to_owned(),
        content: "c".to_owned(),
        systems: vec!["OneTeam".to_owned()],
    };

    let cases = [
        EditForm { title: String::new(), ..valid.clone() },
        EditForm { date: String::new(), ..valid.clone() },
        EditForm { content: "   ".to_owned(), ..valid.clone() },
        EditForm { systems: Vec::new(), ..valid.clone() },
    ];
    for form in cases {
        assert_eq!(form.validate(), Err(EditError::MissingFields));
    }
    assert_eq!(EditError::MissingFields.to_string(), "모든 필드를 입력해주세요.");
}

#[test]
fn toggle_system_adds_then_removes() {
    let mut form = EditForm::default();
    form.toggle_system("넷오피스");
    form.toggle_system("OneTeam");
    assert_eq!(form.systems, vec!["넷오피스".to_owned(), "OneTeam".to_owned()]);
    form.toggle_system("넷오피스");
    assert_eq!(form.systems, vec!["OneTeam".to_owned()]);
}

// =============================================================
// NoticesState
// =============================================================

#[test]
fn apply_loaded_replaces_cache_and_clears_loading() {
    let mut state = NoticesState { loading: true, ..NoticesState::default() };
    state.apply_loaded(sample());
    assert!(!state.loading);
    assert_eq!(state.items.len(), 3);

    state.apply_loaded(Vec::new());
    assert!(state.visible().is_empty());
}

#[test]
fn visible_applies_current_filters() {
    let mut state = NoticesState::default();
    state.apply_loaded(sample());
    state.search = "라우터".to_owned();
    assert_eq!(ids(&state.visible()), vec!["2"]);
}

#[test]
fn begin_edit_uses_cached_record_and_closes_detail() {
    let mut state = NoticesState::default();
    state.apply_loaded(sample());

    // Detail copy differs from the cache; edit must use the cache.
    let mut fetched = state.items[1].clone();
    fetched.title = "fresher title".to_owned();
    state.open_detail(fetched);

    assert!(state.begin_edit());
    assert!(state.detail.is_none());
    assert_eq!(state.edit.as_ref().map(|f| f.title.as_str()), Some("Network Outage"));
}

#[test]
fn begin_edit_fails_when_notice_left_cache() {
    let mut state = NoticesState::default();
    state.open_detail(notice("99", "gone", "", &[]));
    assert!(!state.begin_edit());
    assert!(state.edit.is_none());
    assert!(state.detail.is_some());
}

#[test]
fn mutation_success_closes_all_modals_and_requests_one_reload() {
    let mut state = NoticesState::default();
    state.apply_loaded(sample());
    state.open_detail(state.items[0].clone());
    state.edit = Some(EditForm::from_notice(&state.items[0]));
    state.saving = true;
    let before = state.reload_seq;

    state.mutation_succeeded();

    assert_eq!(state.reload_seq, before + 1);
    assert!(state.detail.is_none());
    assert!(state.edit.is_none());
    assert!(!state.saving);
}

// =============================================================
// reload_trigger
// =============================================================

/// Counts how often a subscriber of `reload_trigger` reruns, which is how
/// often the page's load effect fetches.
fn fetch_counter(state: RwSignal<NoticesState>) -> Memo<usize> {
    let trigger = reload_trigger(state);
    Memo::new(move |prev: Option<&usize>| {
        let _ = trigger.get();
        prev.map_or(1, |n| n + 1)
    })
}

#[test]
fn reload_trigger_fetches_on_mount_and_once_per_mutation() {
    let owner = Owner::new();
    owner.set();
    let state = RwSignal::new(NoticesState { loading: true, ..NoticesState::default() });
    let fetches = fetch_counter(state);
    assert_eq!(fetches.get_untracked(), 1);

    state.update(|s| s.apply_loaded(sample()));
    assert_eq!(fetches.get_untracked(), 1);

    state.update(|s| s.search = "network".to_owned());
    state.update(|s| s.system_filter = "넷오피스".to_owned());
    assert_eq!(fetches.get_untracked(), 1);

    state.update(|s| s.open_detail(s.items[0].clone()));
    state.update(|s| {
        s.begin_edit();
    });
    state.update(|s| s.saving = true);
    assert_eq!(fetches.get_untracked(), 1);

    state.update(NoticesState::mutation_succeeded);
    assert_eq!(fetches.get_untracked(), 2);

    state.update(|s| s.apply_loaded(sample()));
    assert_eq!(fetches.get_untracked(), 2);
}

#[test]
fn reload_trigger_ignores_failed_save() {
    let owner = Owner::new();
    owner.set();
    let state = RwSignal::new(NoticesState::default());
    let fetches = fetch_counter(state);
    assert_eq!(fetches.get_untracked(), 1);

    state.update(|s| s.saving = true);
    state.update(|s| s.saving = false);
    assert_eq!(fetches.get_untracked(), 1);
}
