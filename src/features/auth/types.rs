//! Request and session types for the mock auth collaborator. Passwords are
//! held as `SecretString` so they never show up in `Debug` output or logs.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Signed-in identity shown in the header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecretString,
}

#[derive(Clone, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_debug_redacts_password() {
        let request = LoginRequest {
            email: "ada@example.com".to_string(),
            password: SecretString::from("hunter2"),
        };
        let debug = format!("{request:?}");
        assert!(debug.contains("ada@example.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn user_session_round_trips_through_json() {
        let session = UserSession {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        let json = serde_json::to_string(&session).expect("Failed to serialize");
        let decoded: UserSession = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(decoded, session);
    }
}
