pub mod cv_data;
pub mod resume;

pub use resume::{ContactKind, PlatformKind, Project, ProjectLink, Resume};
