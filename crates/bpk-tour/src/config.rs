#![forbid(unsafe_code)]

//! Data-driven tour configuration.
//!
//! Captures the presentational knobs of a tour as a single [`TourConfig`]
//! that can be loaded from TOML or JSON, so products can relabel or restyle
//! a tour without a rebuild.
//!
//! # Loading
//!
//! ```toml
//! # tour.toml
//! prev_button_label = "Back"
//! next_button_label = "Continue"
//! show_scrim = false
//! scope = "BpkTour"
//! ```
//!
//! ```rust,ignore
//! let config = TourConfig::from_toml_file("tour.toml")?;
//! let props = TourProps::new(true, steps, app).apply_config(&config);
//! ```
//!
//! # Defaults
//!
//! Every field defaults to the component default, so
//! `TourConfig::default()` changes nothing.

use std::collections::BTreeMap;
use std::path::Path;

use bpk_dom::ClassNameResolver;
use serde::{Deserialize, Serialize};

use crate::props::{DEFAULT_NEXT_BUTTON_LABEL, DEFAULT_PREV_BUTTON_LABEL};
use bpk_widgets::popover::DEFAULT_CLOSE_BUTTON_TEXT;

/// Presentational tour settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub prev_button_label: String,
    pub next_button_label: String,
    pub close_button_text: String,
    pub show_scrim: bool,
    /// Stylesheet module name for hashed class names.
    pub scope: Option<String>,
    /// Explicit logical-to-scoped class table.
    pub class_names: BTreeMap<String, String>,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            prev_button_label: DEFAULT_PREV_BUTTON_LABEL.to_owned(),
            next_button_label: DEFAULT_NEXT_BUTTON_LABEL.to_owned(),
            close_button_text: DEFAULT_CLOSE_BUTTON_TEXT.to_owned(),
            show_scrim: true,
            scope: None,
            class_names: BTreeMap::new(),
        }
    }
}

impl TourConfig {
    /// Parse and validate TOML.
    pub fn from_toml_str(s: &str) -> Result<Self, TourConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validated()
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, TourConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate JSON.
    pub fn from_json_str(s: &str) -> Result<Self, TourConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validated()
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TourConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Load by extension: `.json` is JSON, anything else TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TourConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Validation errors. Empty means valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        for (field, value) in [
            ("prev_button_label", &self.prev_button_label),
            ("next_button_label", &self.next_button_label),
            ("close_button_text", &self.close_button_text),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("{field} must not be blank"));
            }
        }
        if self.scope.as_deref().is_some_and(|s| s.trim().is_empty()) {
            errors.push("scope must not be blank".into());
        }
        if self.scope.is_some() && !self.class_names.is_empty() {
            errors.push("scope and class_names are mutually exclusive".into());
        }
        errors
    }

    fn validated(self) -> Result<Self, TourConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(TourConfigError::Validation(errors))
        }
    }

    /// Class name resolver selected by `scope` / `class_names`.
    #[must_use]
    pub fn class_name_resolver(&self) -> ClassNameResolver {
        if let Some(scope) = &self.scope {
            ClassNameResolver::scoped(scope.clone())
        } else if !self.class_names.is_empty() {
            ClassNameResolver::from_map(self.class_names.clone())
        } else {
            ClassNameResolver::identity()
        }
    }
}

/// Errors from loading a [`TourConfig`].
#[derive(Debug, thiserror::Error)]
pub enum TourConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid tour config: {}", .0.join("; "))]
    Validation(Vec<String>),
}
