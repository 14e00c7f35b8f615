use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};

const SESSION_TOKEN_LEN: usize = 48;

/// Fresh opaque session token for the session cookie.
pub fn generate_session_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// Hash a session token using SHA-256 for storage
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
