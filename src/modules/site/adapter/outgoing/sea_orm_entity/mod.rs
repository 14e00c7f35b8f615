pub mod seed_markers;
