//! Mock auth collaborator. Any well-formed credentials sign in; nothing is
//! verified or persisted, so a reload always starts anonymous. The async
//! signatures match what a real session API would need.

use crate::app_lib::AppError;
use crate::features::auth::types::{LoginRequest, RegisterRequest, UserSession};
use secrecy::{ExposeSecret, SecretString};

/// Minimum password length accepted at registration.
const MIN_PASSWORD_CHARS: usize = 6;

/// Restores a previous session. There is no session store, so this
/// always resolves to anonymous.
pub async fn fetch_session() -> Result<Option<UserSession>, AppError> {
    Ok(None)
}

pub async fn login(request: &LoginRequest) -> Result<UserSession, AppError> {
    authenticate(request)
}

pub async fn register(request: &RegisterRequest) -> Result<UserSession, AppError> {
    enroll(request)
}

pub async fn logout() -> Result<(), AppError> {
    tracing::debug!("session cleared");
    Ok(())
}

fn authenticate(request: &LoginRequest) -> Result<UserSession, AppError> {
    let email = normalize_email(&request.email)?;
    require_password(&request.password)?;

    let name = display_name_from_email(&email);
    tracing::info!(user = %name, "signed in");
    Ok(UserSession { name, email })
}

fn enroll(request: &RegisterRequest) -> Result<UserSession, AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Name is required.".to_string()));
    }
    let email = normalize_email(&request.email)?;
    require_password(&request.password)?;
    if request.password.expose_secret().chars().count() < MIN_PASSWORD_CHARS {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_CHARS} characters."
        )));
    }

    tracing::info!(user = %name, "account registered");
    Ok(UserSession {
        name: name.to_string(),
        email,
    })
}

fn normalize_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim().to_lowercase();
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if valid {
        Ok(email)
    } else {
        Err(AppError::Validation("Enter a valid email address.".to_string()))
    }
}

fn require_password(password: &SecretString) -> Result<(), AppError> {
    if password.expose_secret().trim().is_empty() {
        Err(AppError::Validation("Password is required.".to_string()))
    } else {
        Ok(())
    }
}

/// `ada.lovelace@example.com` -> `Ada Lovelace`.
fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let words: Vec<String> = local
        .split(['.', '_', '-', '+'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();
    if words.is_empty() {
        email.to_string()
    } else {
        words.join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: SecretString::from(password),
        }
    }

    #[test]
    fn authenticate_derives_name_from_email() {
        let session = authenticate(&login_request(" Ada.Lovelace@Example.com ", "secret"))
            .expect("login");
        assert_eq!(session.email, "ada.lovelace@example.com");
        assert_eq!(session.name, "Ada Lovelace");
    }

    #[test]
    fn authenticate_rejects_bad_email_or_blank_password() {
        assert!(matches!(
            authenticate(&login_request("not-an-email", "secret")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            authenticate(&login_request("@example.com", "secret")),
            Err(AppError::Validation(_))
        ));
        assert_eq!(
            authenticate(&login_request("ada@example.com", "   ")),
            Err(AppError::Validation("Password is required.".to_string()))
        );
    }

    #[test]
    fn enroll_requires_name_and_long_enough_password() {
        let request = RegisterRequest {
            name: "  ".to_string(),
            email: "grace@example.com".to_string(),
            password: SecretString::from("compiler"),
        };
        assert_eq!(
            enroll(&request),
            Err(AppError::Validation("Name is required.".to_string()))
        );

        let request = RegisterRequest {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            password: SecretString::from("cobol"),
        };
        assert!(enroll(&request).is_err());

        let request = RegisterRequest {
            name: " Grace Hopper ".to_string(),
            email: "grace@example.com".to_string(),
            password: SecretString::from("compiler"),
        };
        let session = enroll(&request).expect("register");
        assert_eq!(session.name, "Grace Hopper");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        assert_eq!(display_name_from_email("bob_smith@example.com"), "Bob Smith");
        assert_eq!(display_name_from_email("..@example.com"), "..@example.com");
    }
}
