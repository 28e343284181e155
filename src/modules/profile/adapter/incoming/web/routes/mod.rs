mod get_profile;
mod update_profile;

pub use get_profile::{__path_get_profile_handler, get_profile_handler};
pub use update_profile::{__path_update_profile_handler, update_profile_handler};
