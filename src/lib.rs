//! Data-management core for a local resume editor.
//!
//! Owns the editable [`ResumeDocument`], a visual theme selection, and the
//! autosave preference, persists all three to independent key-value slots,
//! and exports the document as a dated JSON artifact. Persistence is best
//! effort throughout: the in-memory document stays usable even if every
//! storage operation fails for the whole session.

pub mod app;

pub use app::{
    AppError, FileStorage, MemoryStorage, Result, ResumeDocument, ResumeStore, StorageBackend,
    ThemeDefinition, ThemeRegistry,
};
