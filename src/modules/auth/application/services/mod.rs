pub mod session_token;

pub use session_token::{generate_session_token, hash_token};
