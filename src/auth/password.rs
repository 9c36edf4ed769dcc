use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Credential hashing seam. The service never sees plaintext storage;
/// deployments can swap the scheme without touching signup/signin flow.
pub trait PasswordScheme: Send + Sync {
    /// Hash a plaintext password into a self-describing storage record
    fn hash(&self, password: &str) -> String;

    /// Verify a plaintext password against a stored record.
    /// Malformed or foreign-scheme records verify as false.
    fn verify(&self, password: &str, stored: &str) -> bool;
}

const SCHEME_TAG: &str = "sha256";

/// Default scheme: per-user random salt + SHA-256 digest,
/// stored as `sha256$<salt>$<hex digest>`.
pub struct Sha256Scheme;

impl Sha256Scheme {
    fn digest(salt: &str, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(b"$");
        hasher.update(password.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

impl PasswordScheme for Sha256Scheme {
    fn hash(&self, password: &str) -> String {
        let salt = Uuid::new_v4().simple().to_string();
        format!("{}${}${}", SCHEME_TAG, salt, Self::digest(&salt, password))
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        let mut parts = stored.splitn(3, '$');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(tag), Some(salt), Some(digest)) if tag == SCHEME_TAG => {
                Self::digest(salt, password) == digest
            }
            _ => false,
        }
    }
}
