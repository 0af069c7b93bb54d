use anyhow::{Result, anyhow};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use rand::{Rng, distributions::Alphanumeric};

pub const ACCESS_CODE_LENGTH: usize = 8;

/// Salted argon2 hash in PHC string format.
pub fn hash_secret(secret: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|err| anyhow!("failed to hash secret: {}", err))?;
    Ok(hash.to_string())
}

pub fn verify_secret(secret: &str, stored_hash: &str) -> Result<bool> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|err| anyhow!("stored hash is malformed: {}", err))?;
    Ok(Argon2::default()
        .verify_password(secret.as_bytes(), &parsed)
        .is_ok())
}

/// Upper-case alphanumeric code handed to an advertiser on approval.
pub fn generate_access_code() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ACCESS_CODE_LENGTH)
        .map(|byte| char::from(byte).to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_secret_verifies_only_its_own_input() {
        let hash = hash_secret("K7Q2M9XA").unwrap();
        assert_ne!(hash, "K7Q2M9XA");
        assert!(verify_secret("K7Q2M9XA", &hash).unwrap());
        assert!(!verify_secret("K7Q2M9XB", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_secret("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn access_codes_are_uppercase_alphanumeric() {
        let code = generate_access_code();
        assert_eq!(code.len(), ACCESS_CODE_LENGTH);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }
}
