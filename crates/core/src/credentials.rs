//! Credential verification.
//!
//! [`CredentialVerifier`] is the seam where a real identity provider would
//! plug in. [`DemoCredentials`] is the fixed two-account table used by the
//! demo: plaintext, exact-match, no normalization.

use crate::roles::Role;

/// Maps an email/password pair to the role it grants, if any.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, email: &str, password: &str) -> Option<Role>;
}

/// A single fixed account.
#[derive(Debug, Clone, Copy)]
pub struct CredentialRecord {
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
}

/// The demo accounts.
pub const DEMO_ACCOUNTS: [CredentialRecord; 2] = [
    CredentialRecord {
        email: "startup@example.com",
        password: "startup123",
        role: Role::Startup,
    },
    CredentialRecord {
        email: "admin@example.com",
        password: "admin123",
        role: Role::Admin,
    },
];

/// In-memory lookup over [`DEMO_ACCOUNTS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoCredentials;

impl CredentialVerifier for DemoCredentials {
    fn verify(&self, email: &str, password: &str) -> Option<Role> {
        DEMO_ACCOUNTS
            .iter()
            .find(|record| record.email == email)
            .filter(|record| record.password == password)
            .map(|record| record.role)
    }
}
