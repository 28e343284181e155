pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_updated_at_function;
mod m20260301_000010_create_table_profiles;
mod m20260301_000020_create_table_projects;
mod m20260301_000030_create_table_contact_messages;
mod m20260301_000040_create_table_job_offers;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_updated_at_function::Migration),
            Box::new(m20260301_000010_create_table_profiles::Migration),
            Box::new(m20260301_000020_create_table_projects::Migration),
            Box::new(m20260301_000030_create_table_contact_messages::Migration),
            Box::new(m20260301_000040_create_table_job_offers::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_run_in_file_order() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        // trigger function first, every table attaches it
        assert_eq!(names[0], "m20260301_000001_create_updated_at_function");
    }
}
