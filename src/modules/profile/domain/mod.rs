pub mod entities;

pub use entities::{
    Profile, ProfilePatch, ProfileRecord, DEFAULT_BIO, DEFAULT_EMAIL, DEFAULT_LOCATION,
    DEFAULT_NAME, DEFAULT_PHONE, DEFAULT_TITLE,
};
