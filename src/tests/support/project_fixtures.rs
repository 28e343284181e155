use chrono::Utc;
use uuid::Uuid;

use crate::modules::project::domain::{NewProject, Project, ProjectStatus};

pub fn sample_project() -> Project {
    let now = Utc::now();
    Project {
        id: Uuid::new_v4(),
        name: "Portfolio site".to_string(),
        description: "Personal site with an admin mode".to_string(),
        technologies: vec![
            "React".to_string(),
            "Node.js".to_string(),
            "TypeScript".to_string(),
        ],
        live_url: Some("https://example.com".to_string()),
        github_url: Some("https://github.com/rivka2211/portfolio".to_string()),
        image_url: None,
        status: ProjectStatus::Active,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_new_project() -> NewProject {
    NewProject {
        name: "Portfolio site".to_string(),
        description: "Personal site with an admin mode".to_string(),
        technologies: vec!["React".to_string(), "Node.js".to_string()],
        live_url: None,
        github_url: None,
        image_url: None,
        status: ProjectStatus::InProgress,
    }
}
