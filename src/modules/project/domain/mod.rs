pub mod entities;
mod technologies;

pub use entities::{NewProject, Project, ProjectPatch, ProjectStatus, UnknownProjectStatus};
pub use technologies::{join_technologies, split_technologies};
