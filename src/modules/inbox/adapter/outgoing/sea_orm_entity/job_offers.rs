use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "job_offers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub company_name: String,

    #[sea_orm(column_type = "Text")]
    pub contact_email: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub contact_name: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub job_title: Option<String>,

    // free text; the site offers full-time, part-time, freelance, project
    #[sea_orm(column_type = "Text", nullable)]
    pub job_type: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub salary_range: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub job_description: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub status: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
