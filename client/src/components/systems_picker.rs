//! Checkbox group for choosing one or more systems.

use leptos::prelude::*;

use crate::state::catalog::SystemCatalog;

/// Lists every catalog system plus any already-selected system the catalog
/// does not know, so editing an older notice never hides its tags.
#[component]
pub fn SystemsPicker(
    #[prop(into)] selected: Signal<Vec<String>>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    let catalog = expect_context::<RwSignal<SystemCatalog>>();

    let options = move || {
        let mut names = catalog.get().systems;
        for name in selected.get() {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    };

    view! {
        <div class="systems-picker">
            {move || {
                options()
                    .into_iter()
                    .map(|name| {
                        let checked_name = name.clone();
                        let toggle_name = name.clone();
                        view! {
                            <label class="systems-picker__option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || selected.get().contains(&checked_name)
                                    on:change=move |_| on_toggle.run(toggle_name.clone())
                                />
                                <span>{name}</span>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
