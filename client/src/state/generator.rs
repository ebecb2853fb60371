//! Form-based generator state.

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;

use crate::net::api::FormFields;
use crate::net::error::ApiError;
use crate::state::notices::toggle;

/// Structured generator input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratorForm {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub systems: Vec<String>,
    pub update_details: String,
    pub additional_info: String,
}

impl GeneratorForm {
    /// Empty form dated `today`.
    pub fn new(today: String) -> Self {
        Self { date: today, ..Self::default() }
    }

    pub fn toggle_system(&mut self, system: &str) {
        toggle(&mut self.systems, system);
    }

    /// Selected systems flattened to the single string the backend expects.
    pub fn systems_field(&self) -> String {
        self.systems.join(", ")
    }

    /// Multipart body for `/generate-notice`.
    pub fn fields(&self) -> FormFields {
        vec![
            ("date", self.date.clone()),
            ("systems", self.systems_field()),
            ("update_details", self.update_details.clone()),
            ("additional_info", self.additional_info.clone()),
        ]
    }

    /// `전산공지_YYYYMMDD.txt` from the selected date.
    pub fn download_filename(&self) -> String {
        format!("전산공지_{}.txt", self.date.replace('-', ""))
    }
}

/// Title for a generated notice saved to the collection: the first line
/// without its `제목:` label, or a dated default.
pub fn derive_title(text: &str, date: &str) -> String {
    let first = text.lines().next().unwrap_or_default().trim();
    let title = first.strip_prefix("제목:").unwrap_or(first).trim();
    if title.is_empty() {
        format!("전산 공지({date})")
    } else {
        title.to_owned()
    }
}

/// Page-scoped generator state.
#[derive(Clone, Debug, Default)]
pub struct GeneratorState {
    pub form: GeneratorForm,
    pub submitting: bool,
    /// Generated text; `Some` shows the result panel.
    pub result: Option<String>,
    pub saving: bool,
}

impl GeneratorState {
    pub fn new(today: String) -> Self {
        Self { form: GeneratorForm::new(today), ..Self::default() }
    }

    /// Enter `Submitting`, hiding any previous result.
    ///
    /// Returns the body to send, or `None` while a submission is in flight.
    pub fn begin_submit(&mut self) -> Option<FormFields> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.result = None;
        Some(self.form.fields())
    }

    /// Leave `Submitting`; a failure keeps the result panel hidden.
    ///
    /// # Errors
    ///
    /// Passes the request error through for the caller's toast.
    pub fn finish_submit(&mut self, result: Result<String, ApiError>) -> Result<(), ApiError> {
        self.submitting = false;
        let text = result?;
        self.result = Some(text);
        Ok(())
    }

    /// Clear every field, restore `today`, and hide the result.
    pub fn reset(&mut self, today: String) {
        self.form = GeneratorForm::new(today);
        self.result = None;
    }

    /// `POST /api/notices` body for saving the current result.
    pub fn save_fields(&self) -> Option<FormFields> {
        let text = self.result.as_ref()?;
        Some(vec![
            ("title", derive_title(text, &self.form.date)),
            ("content", text.clone()),
            ("systems", self.form.systems.join(",")),
            ("date", self.form.date.clone()),
        ])
    }
}
