mod create_project;
mod delete_project;
mod get_projects;
mod patch_project;

pub use create_project::{__path_create_project_handler, create_project_handler};
pub use delete_project::{__path_delete_project_handler, delete_project_handler};
pub use get_projects::{__path_get_projects_handler, get_projects_handler};
pub use patch_project::{__path_patch_project_handler, patch_project_handler};
