use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

#[derive(Debug, PartialEq)]
pub enum CredentialError {
    InvalidEmail,
    WeakPassword(String),
    HashingError(String),
}

impl std::fmt::Display for CredentialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialError::InvalidEmail => write!(f, "Invalid email address"),
            CredentialError::WeakPassword(msg) => write!(f, "{}", msg),
            CredentialError::HashingError(msg) => write!(f, "Password hashing error: {}", msg),
        }
    }
}

impl std::error::Error for CredentialError {}

/// Signup emails must look like a plain mailbox@domain address.
pub fn validate_email(email: &str) -> Result<(), CredentialError> {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err(CredentialError::InvalidEmail);
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '+'));
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));

    if local_ok && domain_ok {
        Ok(())
    } else {
        Err(CredentialError::InvalidEmail)
    }
}

/// Passwords need at least 8 characters with an uppercase letter, a
/// lowercase letter, a digit, and a special character.
pub fn validate_password_strength(password: &str) -> Result<(), CredentialError> {
    if password.len() < 8 {
        return Err(CredentialError::WeakPassword(
            "Password must be at least 8 characters long".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(CredentialError::WeakPassword(
            "Password must contain an uppercase letter".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(CredentialError::WeakPassword(
            "Password must contain a lowercase letter".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(CredentialError::WeakPassword(
            "Password must contain a digit".to_string(),
        ));
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        return Err(CredentialError::WeakPassword(
            "Password must contain a special character".to_string(),
        ));
    }
    Ok(())
}

/// Produces a PHC hash string, e.g. `$argon2id$v=19$...`.
pub fn hash_password(password: &str) -> Result<String, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CredentialError::HashingError(e.to_string()))
}

pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(password_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_accepted() {
        assert!(validate_email("lawyer.one@example.com").is_ok());
        assert!(validate_email("a+b@sub.example.in").is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@nodot").is_err());
        assert!(validate_email("user@.example.com").is_err());
    }

    #[test]
    fn test_password_strength_rules() {
        assert!(validate_password_strength("Str0ng!pass").is_ok());
        assert!(validate_password_strength("short1!A").is_ok());
        assert!(validate_password_strength("weak").is_err());
        assert!(validate_password_strength("nouppercase1!").is_err());
        assert!(validate_password_strength("NOLOWERCASE1!").is_err());
        assert!(validate_password_strength("NoDigits!!").is_err());
        assert!(validate_password_strength("NoSpecial123").is_err());
    }

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hash = hash_password("Str0ng!pass").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("Str0ng!pass", &hash));
        assert!(!verify_password("Wrong!pass1", &hash));
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }
}
