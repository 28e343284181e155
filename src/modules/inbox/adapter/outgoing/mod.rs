pub mod inbox_repository_memory;
pub mod inbox_repository_postgres;
pub mod sea_orm_entity;

pub use inbox_repository_memory::InMemoryInboxRepository;
pub use inbox_repository_postgres::InboxRepositoryPostgres;
