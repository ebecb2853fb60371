//! Form-based notice generator page.

use leptos::prelude::*;

use crate::components::systems_picker::SystemsPicker;
use crate::state::generator::GeneratorState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::browser::{confirm, today_iso};
use crate::util::notify::{copy_with_toast, download_with_toast, notify};

/// Generator page: structured inputs in, one generated notice out.
#[component]
pub fn GeneratorPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(GeneratorState::new(today_iso()));
    let result_ref = NodeRef::<leptos::html::Section>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(fields) = state.try_update(GeneratorState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::generate_notice(fields).await;
            match state.try_update(|s| s.finish_submit(result)) {
                Some(Ok(())) => {
                    notify(toasts, ToastKind::Success, "공지가 성공적으로 생성되었습니다!");
                    // Let the result panel render before scrolling to it.
                    gloo_timers::future::TimeoutFuture::new(0).await;
                    if let Some(el) = result_ref.get_untracked() {
                        crate::util::browser::scroll_into_view(&el);
                    }
                }
                Some(Err(e)) => {
                    leptos::logging::error!("notice generation failed: {e}");
                    notify(toasts, ToastKind::Error, format!("오류: {e}"));
                }
                None => {}
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = fields;
    };

    let on_reset = move |_| {
        if confirm("입력한 내용을 모두 초기화하시겠습니까?") {
            state.update(|s| s.reset(today_iso()));
            notify(toasts, ToastKind::Info, "폼이 초기화되었습니다.");
        }
    };

    let result_text = move || state.with(|s| s.result.clone().unwrap_or_default());

    let on_copy = move |_| copy_with_toast(toasts, result_text());

    let on_download = move |_| {
        let filename = state.with_untracked(|s| s.form.download_filename());
        download_with_toast(toasts, &filename, &result_text());
    };

    let on_save = move |_| {
        let Some(fields) = state.with_untracked(|s| if s.saving { None } else { s.save_fields() }) else {
            return;
        };
        state.update(|s| s.saving = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_notice(fields).await {
                Ok(_) => notify(toasts, ToastKind::Success, "공지 목록에 저장되었습니다!"),
                Err(e) => {
                    leptos::logging::error!("saving generated notice failed: {e}");
                    notify(toasts, ToastKind::Error, format!("저장 실패: {e}"));
                }
            }
            state.update(|s| s.saving = false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = fields;
    };

    let submitting = move || state.with(|s| s.submitting);
    let saving = move || state.with(|s| s.saving);
    let selected = Signal::derive(move || state.with(|s| s.form.systems.clone()));
    let on_toggle = Callback::new(move |system: String| state.update(|s| s.form.toggle_system(&system)));

    view! {
        <div class="generator-page">
            <h1>"📝 전산 공지 생성기"</h1>
            <p class="generator-page__subtitle">"업데이트 정보를 입력하면 AI가 공지문을 작성합니다"</p>

            <form class="generator-form" on:submit=on_submit>
                <label class="generator-form__label">
                    "📅 공지 날짜"
                    <input
                        class="generator-form__input"
                        type="date"
                        required
                        prop:value=move || state.with(|s| s.form.date.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.form.date = value);
                        }
                    />
                </label>

                <div class="generator-form__label">
                    "🖥️ 적용 시스템"
                    <SystemsPicker selected=selected on_toggle=on_toggle/>
                </div>

                <label class="generator-form__label">
                    "🔧 업데이트 내용"
                    <textarea
                        class="generator-form__input generator-form__textarea"
                        rows="8"
                        required
                        placeholder="변경 사항, 수정된 기능, 적용 범위 등을 입력하세요"
                        prop:value=move || state.with(|s| s.form.update_details.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.form.update_details = value);
                        }
                    ></textarea>
                </label>

                <label class="generator-form__label">
                    "📌 추가 정보 (선택)"
                    <textarea
                        class="generator-form__input generator-form__textarea"
                        rows="4"
                        placeholder="문의처, 작업 시간, 유의 사항 등"
                        prop:value=move || state.with(|s| s.form.additional_info.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.form.additional_info = value);
                        }
                    ></textarea>
                </label>

                <div class="generator-form__actions">
                    <button type="button" class="btn" on:click=on_reset disabled=submitting>
                        "🔄 초기화"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=submitting>
                        {move || if submitting() { "생성 중..." } else { "🚀 공지 생성하기" }}
                    </button>
                </div>
            </form>

            <Show when=submitting>
                <div class="generator-page__loading">
                    <div class="spinner"></div>
                    <p>"AI가 공지문을 작성하고 있습니다..."</p>
                </div>
            </Show>

            <section
                class="generator-result"
                node_ref=result_ref
                style:display=move || if state.with(|s| s.result.is_some()) { "block" } else { "none" }
            >
                <div class="generator-result__header">
                    <h2>"✅ 생성된 공지"</h2>
                    <div class="generator-result__actions">
                        <button class="btn" on:click=on_copy>
                            "📋 복사"
                        </button>
                        <button class="btn" on:click=on_download>
                            "💾 다운로드"
                        </button>
                        <button class="btn btn--primary" on:click=on_save disabled=saving>
                            {move || if saving() { "저장 중..." } else { "📥 공지 목록에 저장" }}
                        </button>
                    </div>
                </div>
                <div class="generator-result__content">{result_text}</div>
            </section>
        </div>
    }
}
