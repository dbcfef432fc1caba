//! Argon2 password storage.
//!
//! Stored values are PHC strings carrying algorithm, parameters, salt and
//! digest, so verification needs nothing but the stored string.
use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::password_hash::Error;
use argon2::password_hash::SaltString;
use rand::Rng;
use std::sync::LazyLock;

/// Minimum accepted password length, in characters.
pub const MIN_LENGTH: usize = 6;

/// Stand-in digest for logins against unknown accounts.
static DECOY: LazyLock<String> = LazyLock::new(|| hash("no such account").unwrap_or_default());

pub fn hash(password: &str) -> Result<String, Error> {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    let salt = SaltString::encode_b64(&bytes)?;
    let phc = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(phc.to_string())
}

/// Constant-time comparison of a candidate against a stored PHC string.
/// An unparseable stored hash never verifies.
pub fn verify(password: &str, hashword: &str) -> bool {
    match PasswordHash::new(hashword) {
        Ok(phc) => Argon2::default()
            .verify_password(password.as_bytes(), &phc)
            .is_ok(),
        Err(_) => false,
    }
}

/// Does the work of [`verify`] against a throwaway digest and always
/// fails. Keeps an unknown email as slow as a wrong password.
pub fn decoy(password: &str) -> bool {
    let _ = verify(password, &DECOY);
    false
}

pub fn long_enough(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}
