use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use super::domain::{ResumeDocument, ThemeDefinition, ThemeRegistry};
use super::error::{AppError, Result};
use super::export;
use super::storage::{AUTOSAVE_SLOT, DOCUMENT_SLOT, StorageBackend, THEME_SLOT};

/// Version written into the document slot. Bump when the persisted shape
/// changes, and teach `decode_document` to migrate the old one.
const DOCUMENT_SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    document: &'a ResumeDocument,
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    document: serde_json::Value,
}

/// Decode a document slot, accepting the current envelope, older envelope
/// versions, and pre-versioning saves that stored the bare document.
fn decode_document(raw: &str) -> Result<ResumeDocument> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if value.get("version").is_some() {
        let envelope: Envelope = serde_json::from_value(value)?;
        if envelope.version > DOCUMENT_SCHEMA_VERSION {
            return Err(AppError::Storage(format!(
                "saved resume has unsupported version {}",
                envelope.version
            )));
        }
        // versions 1..=current share one shape so far
        Ok(serde_json::from_value(envelope.document)?)
    } else {
        // version 0: the original web app persisted the bare document
        Ok(serde_json::from_value(value)?)
    }
}

/// Owns the live resume document, the active theme, and the autosave
/// preference, and orchestrates loading, saving, reset and export against a
/// [`StorageBackend`].
///
/// Every persistence-facing operation is best effort: read failures fall
/// back to defaults, write failures leave the in-memory state authoritative,
/// and nothing here panics or propagates an unrecoverable error. One store
/// instance is constructed at startup and passed to the UI layer; there is
/// no ambient global.
pub struct ResumeStore {
    document: ResumeDocument,
    theme_key: String,
    autosave_enabled: bool,
    last_saved_at: Option<DateTime<Utc>>,
    registry: ThemeRegistry,
    backend: Box<dyn StorageBackend>,
}

impl ResumeStore {
    /// Store with default state; does not touch the backend.
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        let registry = ThemeRegistry::builtin();
        Self {
            document: ResumeDocument::default_template(),
            theme_key: registry.default_key().to_string(),
            autosave_enabled: true,
            last_saved_at: None,
            registry,
            backend: Box::new(backend),
        }
    }

    /// Store initialized from whatever the backend holds.
    pub fn open(backend: impl StorageBackend + 'static) -> Self {
        let mut store = Self::new(backend);
        store.load();
        store
    }

    // --- Accessors ---

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    pub fn theme_key(&self) -> &str {
        &self.theme_key
    }

    /// Active theme, resolved through the registry's total fallback.
    pub fn current_theme(&self) -> &ThemeDefinition {
        self.registry.resolve(&self.theme_key)
    }

    pub fn themes(&self) -> &[ThemeDefinition] {
        self.registry.themes()
    }

    pub fn autosave_enabled(&self) -> bool {
        self.autosave_enabled
    }

    /// When the document last reached the backend. In-memory only; resets
    /// each session.
    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        self.last_saved_at
    }

    /// Read-only view of the backend, mainly for diagnostics and tests.
    pub fn backend(&self) -> &dyn StorageBackend {
        &*self.backend
    }

    // --- Persistence ---

    /// Read all three slots independently. A missing or malformed slot keeps
    /// its in-memory default and never affects the others.
    pub fn load(&mut self) {
        if let Some(raw) = self.backend.get(DOCUMENT_SLOT) {
            match decode_document(&raw) {
                Ok(document) => {
                    self.document = document;
                    // what's in memory now mirrors what's on disk
                    self.last_saved_at = Some(Utc::now());
                }
                Err(e) => warn!("failed to load saved resume, keeping defaults: {e}"),
            }
        }

        if let Some(raw) = self.backend.get(THEME_SLOT) {
            let key = raw.trim();
            if self.registry.contains(key) {
                self.theme_key = key.to_string();
            } else {
                warn!(key, "ignoring unknown saved theme, keeping default");
            }
        }

        if let Some(raw) = self.backend.get(AUTOSAVE_SLOT) {
            match serde_json::from_str::<bool>(&raw) {
                Ok(enabled) => self.autosave_enabled = enabled,
                Err(e) => warn!("failed to load autosave preference, keeping default: {e}"),
            }
        }
    }

    /// Write the current document to the backend. On failure the in-memory
    /// document stays the sole source of truth; no retry.
    pub fn persist(&mut self) {
        let envelope = EnvelopeRef {
            version: DOCUMENT_SCHEMA_VERSION,
            document: &self.document,
        };
        let payload = match serde_json::to_string_pretty(&envelope) {
            Ok(payload) => payload,
            Err(e) => {
                error!("failed to serialize resume data: {e}");
                return;
            }
        };
        match self.backend.set(DOCUMENT_SLOT, &payload) {
            Ok(()) => {
                self.last_saved_at = Some(Utc::now());
                debug!("resume data persisted");
            }
            Err(e) => error!("failed to save resume data: {e}"),
        }
    }

    // --- Mutations ---

    /// Apply an edit to the live document. This is the change hook: the
    /// closure runs synchronously, and the document is persisted in the same
    /// turn when autosave is on.
    pub fn update<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut ResumeDocument),
    {
        edit(&mut self.document);
        if self.autosave_enabled {
            self.persist();
        }
    }

    /// Replace the document with a fresh default template and persist.
    /// Reset is an explicit user action, so it saves even with autosave off.
    pub fn reset(&mut self) {
        self.document = ResumeDocument::default_template();
        self.persist();
    }

    /// Select a theme. Unknown keys are ignored; known keys are saved
    /// immediately, independent of the autosave flag.
    pub fn set_theme(&mut self, key: &str) {
        if !self.registry.contains(key) {
            return;
        }
        self.theme_key = key.to_string();
        if let Err(e) = self.backend.set(THEME_SLOT, &self.theme_key) {
            error!("failed to save theme: {e}");
        }
    }

    /// Toggle autosave. The preference itself is always saved immediately,
    /// whatever its new value.
    pub fn set_autosave(&mut self, enabled: bool) {
        self.autosave_enabled = enabled;
        let payload = if enabled { "true" } else { "false" };
        if let Err(e) = self.backend.set(AUTOSAVE_SLOT, payload) {
            error!("failed to save autosave preference: {e}");
        }
    }

    /// Export the current document as a dated JSON artifact in `dir`.
    pub fn export_json(&self, dir: &Path) -> Result<PathBuf> {
        match export::export_document(&self.document, dir) {
            Ok(path) => Ok(path),
            Err(e) => {
                error!("failed to export resume: {e}");
                Err(e)
            }
        }
    }
}
