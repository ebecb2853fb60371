//! Known system names offered by the pickers and the list filter.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::TemplateStructure;

/// Systems offered before the backend template has been fetched.
pub const DEFAULT_SYSTEMS: [&str; 4] = ["Smart DERP/POS", "넷오피스", "E-Commerce", "OneTeam"];

/// App-wide list of selectable systems.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemCatalog {
    pub systems: Vec<String>,
}

impl Default for SystemCatalog {
    fn default() -> Self {
        Self { systems: DEFAULT_SYSTEMS.iter().map(|s| (*s).to_owned()).collect() }
    }
}

impl SystemCatalog {
    /// Replace the catalog with the backend's systems.
    ///
    /// An empty or nameless template leaves the current list untouched.
    pub fn apply_template(&mut self, template: &TemplateStructure) {
        let mut systems: Vec<String> = Vec::with_capacity(template.systems.len());
        for entry in &template.systems {
            let name = entry.name().trim();
            if !name.is_empty() && !systems.iter().any(|s| s == name) {
                systems.push(name.to_owned());
            }
        }
        if !systems.is_empty() {
            self.systems = systems;
        }
    }
}
