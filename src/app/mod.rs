//! Application core for the resume editor.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (ResumeDocument, themes)
//! - `storage.rs` - Persistence gateway over a key-value substrate
//! - `store.rs` - ResumeStore, the stateful coordinator
//! - `export.rs` - Downloadable JSON artifact generation
//! - `error.rs` - Error types

pub mod domain;
pub mod error;
pub mod export;
pub mod storage;
pub mod store;

// Re-exports for convenient external access
pub use domain::{
    Award, AvatarConfig, EducationEntry, ExperienceEntry, JobIntention, MainWork, Prepend,
    Profile, Project, ResumeDocument, ThemeDefinition, ThemePalette, ThemeRegistry,
};
pub use error::{AppError, Result};
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
pub use store::ResumeStore;
