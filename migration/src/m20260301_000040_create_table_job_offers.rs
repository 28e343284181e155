use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobOffers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobOffers::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(JobOffers::CompanyName).text().not_null())
                    .col(ColumnDef::new(JobOffers::ContactEmail).text().not_null())
                    .col(ColumnDef::new(JobOffers::ContactName).text())
                    .col(ColumnDef::new(JobOffers::JobTitle).text())
                    .col(ColumnDef::new(JobOffers::JobType).text())
                    .col(ColumnDef::new(JobOffers::Location).text())
                    .col(ColumnDef::new(JobOffers::SalaryRange).text())
                    .col(ColumnDef::new(JobOffers::JobDescription).text())
                    .col(ColumnDef::new(JobOffers::Message).text())
                    .col(
                        ColumnDef::new(JobOffers::Status)
                            .text()
                            .not_null()
                            .default("new"),
                    )
                    .col(
                        ColumnDef::new(JobOffers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_job_offers_created_at
                ON job_offers (created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_job_offers_created_at")
            .await?;

        manager
            .drop_table(Table::drop().table(JobOffers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JobOffers {
    Table,
    Id,
    CompanyName,
    ContactEmail,
    ContactName,
    JobTitle,
    JobType,
    Location,
    SalaryRange,
    JobDescription,
    Message,
    Status,
    CreatedAt,
}
