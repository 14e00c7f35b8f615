pub mod seed_marker_store;

pub use seed_marker_store::{SeedMarkerError, SeedMarkerStore};
