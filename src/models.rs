//! Data types shared across the relay
//!
//! These mirror the contract with the client web application: failure payloads
//! and the user classifiers it expects as query parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of the user on whose behalf authentication was attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    Jeune,
    Conseiller,
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserType::Jeune => write!(f, "JEUNE"),
            UserType::Conseiller => write!(f, "CONSEILLER"),
        }
    }
}

/// Organization the user is affiliated with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStructure {
    Milo,
    FranceTravail,
    PassEmploi,
}

impl fmt::Display for UserStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserStructure::Milo => write!(f, "MILO"),
            UserStructure::FranceTravail => write!(f, "FRANCE_TRAVAIL"),
            UserStructure::PassEmploi => write!(f, "PASS_EMPLOI"),
        }
    }
}

/// Error payload carried by a [`Failure`]
///
/// `code` and `message` are always present (either may be empty). `reason` is
/// the human-readable explanation preferred over `code` when reporting back to
/// the client. The contact fields are forwarded verbatim when known.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prenom: Option<String>,
}

/// Unsuccessful outcome of an operation, carrying its error payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Failure {
    pub error: ErrorPayload,
}

impl Failure {
    #[must_use]
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            error: ErrorPayload {
                code: code.to_string(),
                message: message.to_string(),
                ..ErrorPayload::default()
            },
        }
    }

    /// Attach a human-readable reason, preferred over the code in redirects
    #[must_use]
    pub fn with_reason(mut self, reason: &str) -> Self {
        self.error.reason = Some(reason.to_string());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: &str) -> Self {
        self.error.email = Some(email.to_string());
        self
    }

    #[must_use]
    pub fn with_nom(mut self, nom: &str) -> Self {
        self.error.nom = Some(nom.to_string());
        self
    }

    #[must_use]
    pub fn with_prenom(mut self, prenom: &str) -> Self {
        self.error.prenom = Some(prenom.to_string());
        self
    }
}

/// Tagged result of an operation whose failure must be reported to the client
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    Success(T),
    Failure(Failure),
}

impl<T> Outcome<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The failure payload, if this outcome is one
    #[must_use]
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_type_display_spelling() {
        assert_eq!(UserType::Jeune.to_string(), "JEUNE");
        assert_eq!(UserType::Conseiller.to_string(), "CONSEILLER");
    }

    #[test]
    fn test_user_structure_display_spelling() {
        assert_eq!(UserStructure::Milo.to_string(), "MILO");
        assert_eq!(UserStructure::FranceTravail.to_string(), "FRANCE_TRAVAIL");
        assert_eq!(UserStructure::PassEmploi.to_string(), "PASS_EMPLOI");
    }

    #[test]
    fn test_enum_serde_spelling_matches_display() {
        let json = serde_json::to_string(&UserStructure::FranceTravail).unwrap();
        assert_eq!(json, "\"FRANCE_TRAVAIL\"");

        let parsed: UserType = serde_json::from_str("\"JEUNE\"").unwrap();
        assert_eq!(parsed, UserType::Jeune);
    }

    #[test]
    fn test_failure_builder_sets_optional_fields() {
        let failure = Failure::new("ERROR_CODE", "something broke")
            .with_reason("Test error")
            .with_email("test@example.com");

        assert_eq!(failure.error.code, "ERROR_CODE");
        assert_eq!(failure.error.reason.as_deref(), Some("Test error"));
        assert_eq!(failure.error.email.as_deref(), Some("test@example.com"));
        assert!(failure.error.nom.is_none());
        assert!(failure.error.prenom.is_none());
    }

    #[test]
    fn test_outcome_predicates() {
        let success: Outcome<&str> = Outcome::Success("code");
        assert!(success.is_success());
        assert!(success.failure().is_none());

        let failure: Outcome<&str> = Outcome::Failure(Failure::new("ERROR_CODE", ""));
        assert!(failure.is_failure());
        assert_eq!(failure.failure().unwrap().error.code, "ERROR_CODE");
    }
}
