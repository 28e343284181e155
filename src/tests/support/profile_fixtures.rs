use chrono::Utc;
use uuid::Uuid;

use crate::modules::profile::domain::ProfileRecord;

pub fn sample_profile_record() -> ProfileRecord {
    let now = Utc::now();
    ProfileRecord {
        id: Uuid::new_v4(),
        name: Some("Rivka".to_string()),
        title: Some("Full Stack Developer".to_string()),
        bio: Some("I build web and mobile apps.".to_string()),
        email: Some("rivka.dev@email.com".to_string()),
        phone: None,
        location: Some("Israel".to_string()),
        avatar_url: None,
        created_at: now,
        updated_at: now,
    }
}
