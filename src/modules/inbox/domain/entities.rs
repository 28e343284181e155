use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Status every submission starts in.
pub const STATUS_NEW: &str = "new";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0} is not a valid email address")]
    InvalidEmail(&'static str),
}

fn required(value: &str, field: &'static str) -> Result<(), IntakeValidationError> {
    if value.trim().is_empty() {
        return Err(IntakeValidationError::MissingField(field));
    }
    Ok(())
}

fn valid_email(value: &str, field: &'static str) -> Result<(), IntakeValidationError> {
    required(value, field)?;
    if !EmailAddress::is_valid(value.trim()) {
        return Err(IntakeValidationError::InvalidEmail(field));
    }
    Ok(())
}

fn trimmed(value: String) -> String {
    value.trim().to_string()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(trimmed)
        .filter(|v| !v.is_empty())
}

//
// ──────────────────────────────────────────────────────────
// Contact messages
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

impl NewContactMessage {
    pub fn validate(&self) -> Result<(), IntakeValidationError> {
        required(&self.name, "name")?;
        valid_email(&self.email, "email")?;
        required(&self.message, "message")
    }

    /// Trims every field and drops a blank subject.
    pub fn normalized(self) -> Self {
        Self {
            name: trimmed(self.name),
            email: trimmed(self.email),
            subject: non_blank(self.subject),
            message: trimmed(self.message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Job offers
// ──────────────────────────────────────────────────────────
//

/// Choices the job-offer form offers. The stored value stays free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Freelance,
    Project,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Freelance,
        JobType::Project,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Freelance => "freelance",
            JobType::Project => "project",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewJobOffer {
    pub company_name: String,
    pub contact_email: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl NewJobOffer {
    pub fn validate(&self) -> Result<(), IntakeValidationError> {
        required(&self.company_name, "company_name")?;
        required(self.job_title.as_deref().unwrap_or_default(), "job_title")?;
        valid_email(&self.contact_email, "contact_email")?;
        required(
            self.job_description.as_deref().unwrap_or_default(),
            "job_description",
        )
    }

    pub fn normalized(self) -> Self {
        Self {
            company_name: trimmed(self.company_name),
            contact_email: trimmed(self.contact_email),
            contact_name: non_blank(self.contact_name),
            job_title: non_blank(self.job_title),
            job_type: non_blank(self.job_type),
            location: non_blank(self.location),
            salary_range: non_blank(self.salary_range),
            job_description: non_blank(self.job_description),
            message: non_blank(self.message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOffer {
    pub id: Uuid,
    pub company_name: String,
    pub contact_email: String,
    pub contact_name: Option<String>,
    pub job_title: Option<String>,
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub salary_range: Option<String>,
    pub job_description: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Receipt
// ──────────────────────────────────────────────────────────
//

/// All a public visitor gets back after submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<&ContactMessage> for SubmissionReceipt {
    fn from(m: &ContactMessage) -> Self {
        Self {
            id: m.id,
            created_at: m.created_at,
        }
    }
}

impl From<&JobOffer> for SubmissionReceipt {
    fn from(o: &JobOffer) -> Self {
        Self {
            id: o.id,
            created_at: o.created_at,
        }
    }
}
