pub mod auth;
pub mod email;
pub mod github;
pub mod inbox;
pub mod profile;
pub mod project;
