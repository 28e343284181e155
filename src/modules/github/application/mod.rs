pub mod github_use_cases;
pub mod ports;
pub mod service;
