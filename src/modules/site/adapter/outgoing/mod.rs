pub mod sea_orm_entity;
pub mod seed_marker_store_postgres;

pub use seed_marker_store_postgres::SeedMarkerStorePostgres;
