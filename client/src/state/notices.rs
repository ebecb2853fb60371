//! Notice management state: cached collection, filters, and the two modals.
//!
//! DESIGN
//! ======
//! The cache is never authoritative. Only `apply_loaded` writes `items`, and
//! every successful mutation bumps `reload_seq` exactly once so the page
//! refetches the whole collection instead of patching locally.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use leptos::prelude::*;

use crate::net::api::FormFields;
use crate::net::types::Notice;

/// Edit submission rejected before any request is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("모든 필드를 입력해주세요.")]
    MissingFields,
}

/// Filter the cached collection by search term and system tag.
///
/// Both predicates must hold; an empty term or filter matches everything.
pub fn filter_notices(items: &[Notice], search: &str, system: &str) -> Vec<Notice> {
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|n| n.matches(&needle, system))
        .cloned()
        .collect()
}

/// Values bound to the edit modal's inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditForm {
    pub id: String,
    pub title: String,
    pub date: String,
    pub content: String,
    pub systems: Vec<String>,
}

impl EditForm {
    pub fn from_notice(notice: &Notice) -> Self {
        Self {
            id: notice.id.clone(),
            title: notice.title.clone(),
            date: notice.date.clone(),
            content: notice.content.clone(),
            systems: notice.systems.clone(),
        }
    }

    /// Select or deselect one system.
    pub fn toggle_system(&mut self, system: &str) {
        toggle(&mut self.systems, system);
    }

    /// Build the `PUT` form body.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::MissingFields`] when title, date or content is
    /// blank, or no system is selected.
    pub fn validate(&self) -> Result<FormFields, EditError> {
        let blank = [&self.title, &self.date, &self.content]
            .iter()
            .any(|v| v.trim().is_empty());
        if blank || self.systems.is_empty() {
            return Err(EditError::MissingFields);
        }
        Ok(vec![
            ("title", self.title.clone()),
            ("date", self.date.clone()),
            ("content", self.content.clone()),
            ("systems", self.systems.join(",")),
        ])
    }
}

/// Add `value` if absent, remove it if present.
pub fn toggle(selected: &mut Vec<String>, value: &str) {
    if let Some(pos) = selected.iter().position(|s| s == value) {
        selected.remove(pos);
    } else {
        selected.push(value.to_owned());
    }
}

/// Page-scoped notice management state.
#[derive(Clone, Debug, Default)]
pub struct NoticesState {
    /// Last fetched collection.
    pub items: Vec<Notice>,
    pub loading: bool,
    pub search: String,
    /// Selected system filter; empty means all systems.
    pub system_filter: String,
    /// Detail modal content; `Some` keeps the modal open.
    pub detail: Option<Notice>,
    /// Edit modal form; `Some` keeps the modal open.
    pub edit: Option<EditForm>,
    /// Bumped to request a full reload.
    pub reload_seq: u64,
    pub saving: bool,
}

impl NoticesState {
    /// Notices passing the current filters.
    pub fn visible(&self) -> Vec<Notice> {
        filter_notices(&self.items, &self.search, &self.system_filter)
    }

    pub fn apply_loaded(&mut self, items: Vec<Notice>) {
        self.items = items;
        self.loading = false;
    }

    pub fn open_detail(&mut self, notice: Notice) {
        self.detail = Some(notice);
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Open the edit modal for the notice shown in the detail modal, using
    /// the cached record. Closes the detail modal.
    ///
    /// Returns `false` when the notice is no longer in the cache.
    pub fn begin_edit(&mut self) -> bool {
        let Some(id) = self.detail.as_ref().map(|n| n.id.clone()) else {
            return false;
        };
        let Some(cached) = self.items.iter().find(|n| n.id == id) else {
            return false;
        };
        self.edit = Some(EditForm::from_notice(cached));
        self.detail = None;
        true
    }

    pub fn close_edit(&mut self) {
        self.edit = None;
    }

    /// Close every modal and request exactly one reload.
    pub fn mutation_succeeded(&mut self) {
        self.detail = None;
        self.edit = None;
        self.saving = false;
        self.reload_seq += 1;
    }
}

/// Signal that changes only when `reload_seq` does.
///
/// Fetch effects must read this rather than `state` itself; any other write
/// to the page state (including the load that a fetch applies) would
/// otherwise start another fetch.
pub fn reload_trigger(state: RwSignal<NoticesState>) -> Memo<u64> {
    Memo::new(move |_| state.with(|s| s.reload_seq))
}
