pub mod content_seeder;

pub use content_seeder::{ContentSeeder, SeedContentError, SeedReport};
