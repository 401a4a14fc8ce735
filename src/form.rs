//! The form module owns the metadata form fields and mirrors every change
//! to a persistence backend.

use anyhow::Result;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::FORM_STATE_KEY;

/// Key-value persistence capability the form store writes through.
///
/// Implementations may be backed by a file, an embedded database or an
/// in-memory map; the store never assumes more than these three operations.
pub trait StatePersistence {
    /// Returns the stored value for `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key` from the backend. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: StatePersistence + ?Sized> StatePersistence for &T {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// The five user-entered fields describing the page under analysis.
///
/// All fields are free text. Only `url` is load-bearing: it drives the
/// metadata fetch and provides context to the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormData {
    pub url: String,
    pub current_title: String,
    pub current_description: String,
    pub keywords: String,
    pub industry: String,
}

/// A partial update merged into [`FormData`]; `None` fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct FormPatch {
    pub url: Option<String>,
    pub current_title: Option<String>,
    pub current_description: Option<String>,
    pub keywords: Option<String>,
    pub industry: Option<String>,
}

impl FormPatch {
    pub fn is_empty(&self) -> bool {
        self.url.is_none()
            && self.current_title.is_none()
            && self.current_description.is_none()
            && self.keywords.is_none()
            && self.industry.is_none()
    }
}

/// Holds the live [`FormData`] and mirrors it to a [`StatePersistence`]
/// backend on every change.
///
/// Backend failures are logged and swallowed: the store stays fully usable
/// in memory when persistence is unavailable, and unparseable persisted
/// state falls back to the all-empty default.
pub struct FormStore<P: StatePersistence> {
    backend: P,
    data: FormData,
}

impl<P: StatePersistence> FormStore<P> {
    /// Opens the store, seeding the form from persisted state when present.
    pub fn open(backend: P) -> Self {
        let data = match backend.load(FORM_STATE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(data) => data,
                Err(err) => {
                    warn!("Ignoring unparseable saved form data: {err}");
                    FormData::default()
                }
            },
            Ok(None) => FormData::default(),
            Err(err) => {
                warn!("Failed to read saved form data: {err}");
                FormData::default()
            }
        };

        Self { backend, data }
    }

    pub fn get(&self) -> &FormData {
        &self.data
    }

    /// Merges `patch` into the form and persists the full form state.
    pub fn set(&mut self, patch: FormPatch) {
        if let Some(url) = patch.url {
            self.data.url = url;
        }
        if let Some(title) = patch.current_title {
            self.data.current_title = title;
        }
        if let Some(description) = patch.current_description {
            self.data.current_description = description;
        }
        if let Some(keywords) = patch.keywords {
            self.data.keywords = keywords;
        }
        if let Some(industry) = patch.industry {
            self.data.industry = industry;
        }

        match serde_json::to_string(&self.data) {
            Ok(raw) => {
                if let Err(err) = self.backend.save(FORM_STATE_KEY, &raw) {
                    warn!("Failed to save form data: {err}");
                }
            }
            Err(err) => warn!("Failed to serialize form data: {err}"),
        }
    }

    /// Restores the all-empty default form and clears the persisted copy.
    pub fn reset(&mut self) {
        self.data = FormData::default();
        if let Err(err) = self.backend.remove(FORM_STATE_KEY) {
            warn!("Failed to remove saved form data: {err}");
        }
    }
}
