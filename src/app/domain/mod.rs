pub mod resume;
pub mod theme;

pub use resume::{
    Award, AvatarConfig, EducationEntry, ExperienceEntry, JobIntention, MainWork, Prepend,
    Profile, Project, ResumeDocument,
};
pub use theme::{ThemeDefinition, ThemePalette, ThemeRegistry};
