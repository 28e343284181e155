pub mod app_state_builder;
pub mod auth_helper;
pub mod profile_fixtures;
pub mod project_fixtures;
pub mod stubs;
