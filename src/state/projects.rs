//! Project catalog and grid selection state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog is shipped as `data/projects.json` and embedded at compile
//! time. The projects grid reads it once; the selected project decides
//! whether the carousel overlay is mounted.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use std::collections::HashSet;

use crate::consts::CARD_STAGGER_SECS;

const BUILTIN_CATALOG: &str = include_str!("../../data/projects.json");

/// A single portfolio entry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub github: String,
    /// Cover image shown on the card.
    pub image: String,
    /// Gallery opened in the carousel.
    pub images: Vec<String>,
}

impl Project {
    /// Whether the card shows an image-count badge.
    #[must_use]
    pub fn has_gallery(&self) -> bool {
        self.images.len() > 1
    }

    #[must_use]
    pub fn open_label(&self) -> String {
        format!("Open carousel for {}", self.title)
    }
}

/// Catalog load and validation failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid project catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("project {id} has no gallery images")]
    EmptyGallery { id: u32 },
    #[error("duplicate project id {0}")]
    DuplicateId(u32),
}

/// Validated, ordered list of projects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Parse and validate a JSON array of projects.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, a project with an empty gallery, or a repeated id.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let projects: Vec<Project> = serde_json::from_str(raw)?;
        let mut seen = HashSet::new();
        for project in &projects {
            if project.images.is_empty() {
                return Err(CatalogError::EmptyGallery { id: project.id });
            }
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateId(project.id));
            }
        }
        Ok(Self { projects })
    }

    /// The catalog embedded in the binary. Falls back to an empty catalog and
    /// logs when the embedded data is invalid.
    #[must_use]
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_CATALOG) {
            Ok(catalog) => catalog,
            Err(err) => {
                log::error!("builtin project catalog rejected: {err}");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Which project's carousel is open, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectsState {
    pub selected: Option<u32>,
    /// Set once the section has scrolled into view.
    pub revealed: bool,
}

impl ProjectsState {
    pub fn open(&mut self, id: u32) {
        self.selected = Some(id);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }
}

/// CSS `animation-delay` for the card at `index`.
#[must_use]
pub fn card_animation_delay(index: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let secs = index as f64 * CARD_STAGGER_SECS;
    format!("animation-delay: {secs:.1}s")
}

/// Keys that activate a focused card cover.
#[must_use]
pub fn opens_on_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
