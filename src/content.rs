use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// One selectable navigation destination: a section id plus its display label.
///
/// The list is fixed at startup; the nav controller treats it as a closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Hero {
    pub quote: String,
    pub attribution: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Vec<String>,
}

impl Section {
    pub fn heading(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.label)
    }
}

/// The page content. Supplied by the user as a TOML file; the viewer treats
/// it as immutable data for the lifetime of the process.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Portfolio {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub hero: Hero,
    pub sections: Vec<Section>,
    #[serde(default)]
    initial_section: Option<String>,
}

impl Portfolio {
    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(
                source,
                format!("failed to read portfolio content: {}", path.display()),
            )
        })?;
        Self::from_toml_str(&raw).map_err(|err| match err {
            AppError::InvalidArgument(message) => {
                AppError::invalid_argument(format!("{}: {message}", path.display()))
            }
            other => other,
        })
    }

    pub fn from_toml_str(raw: &str) -> AppResult<Self> {
        let parsed = toml::from_str::<Self>(raw)
            .map_err(|source| AppError::invalid_argument(format!("content parse error: {source}")))?;
        parsed.validated()
    }

    fn validated(self) -> AppResult<Self> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_argument("portfolio name must not be empty"));
        }
        if self.sections.is_empty() {
            return Err(AppError::invalid_argument(
                "portfolio must declare at least one section",
            ));
        }
        for (idx, section) in self.sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(AppError::invalid_argument(format!(
                    "section #{} has a blank id",
                    idx + 1
                )));
            }
            if section.label.trim().is_empty() {
                return Err(AppError::invalid_argument(format!(
                    "section '{}' has a blank label",
                    section.id
                )));
            }
            if self.sections[..idx].iter().any(|s| s.id == section.id) {
                return Err(AppError::invalid_argument(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
        }
        if let Some(initial) = &self.initial_section
            && !self.sections.iter().any(|s| &s.id == initial)
        {
            return Err(AppError::invalid_argument(format!(
                "initial_section '{initial}' does not match any section id"
            )));
        }
        Ok(self)
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        self.sections
            .iter()
            .map(|section| NavItem {
                id: section.id.clone(),
                label: section.label.clone(),
            })
            .collect()
    }

    /// Index of the section that starts out active. Validation guarantees a
    /// configured `initial_section` resolves; absent one, the first section.
    pub fn initial_index(&self) -> usize {
        self.initial_section
            .as_ref()
            .and_then(|initial| self.sections.iter().position(|s| &s.id == initial))
            .unwrap_or(0)
    }

}
