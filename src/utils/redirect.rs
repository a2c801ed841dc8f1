//! Failure redirect construction
//!
//! Composes the client web application's error-callback URL from a [`Failure`]
//! and optional user classifiers, then issues a single 307 Temporary Redirect.

use actix_web::{http::header, HttpResponse};

use crate::models::{Failure, UserStructure, UserType};

/// Builder for the error-callback redirect sent to the client web application
///
/// The reason reported to the client is the failure's `reason` when set,
/// otherwise its `code` (possibly empty). Optional parameters are appended
/// only when present, in a fixed order the client relies on.
pub struct FailureRedirect {
    base_url: String,
    reason: String,
    user_type: Option<UserType>,
    user_structure: Option<UserStructure>,
    email: Option<String>,
    nom: Option<String>,
    prenom: Option<String>,
}

impl FailureRedirect {
    /// Start a redirect towards `base_url`, seeded from the failure payload
    #[must_use]
    pub fn new(base_url: &str, failure: &Failure) -> Self {
        let error = &failure.error;
        Self {
            base_url: base_url.to_string(),
            reason: error.reason.clone().unwrap_or_else(|| error.code.clone()),
            user_type: None,
            user_structure: None,
            email: error.email.clone(),
            nom: error.nom.clone(),
            prenom: error.prenom.clone(),
        }
    }

    #[must_use]
    pub fn with_user_type(mut self, user_type: UserType) -> Self {
        self.user_type = Some(user_type);
        self
    }

    #[must_use]
    pub fn with_user_structure(mut self, user_structure: UserStructure) -> Self {
        self.user_structure = Some(user_structure);
        self
    }

    /// The composed callback URL
    ///
    /// Values are concatenated verbatim: the client web application parses the
    /// `reason` parameter unencoded, so no percent-encoding is applied.
    #[must_use]
    pub fn location(&self) -> String {
        let mut url = format!("{}?reason={}", self.base_url, self.reason);
        if let Some(user_type) = self.user_type {
            url.push_str(&format!("&typeUtilisateur={user_type}"));
        }
        if let Some(user_structure) = self.user_structure {
            url.push_str(&format!("&structureUtilisateur={user_structure}"));
        }
        if let Some(email) = &self.email {
            url.push_str(&format!("&email={email}"));
        }
        if let Some(nom) = &self.nom {
            url.push_str(&format!("&nom={nom}"));
        }
        if let Some(prenom) = &self.prenom {
            url.push_str(&format!("&prenom={prenom}"));
        }
        url
    }

    /// Build the final redirect response (always 307 Temporary Redirect)
    #[must_use]
    pub fn build(self) -> HttpResponse {
        HttpResponse::TemporaryRedirect()
            .append_header((header::LOCATION, self.location()))
            .finish()
    }
}

/// Issue the error-callback redirect for a failed authentication attempt
#[must_use]
pub fn redirect_failure(
    base_url: &str,
    failure: &Failure,
    user_type: Option<UserType>,
    user_structure: Option<UserStructure>,
) -> HttpResponse {
    let mut redirect = FailureRedirect::new(base_url, failure);
    if let Some(user_type) = user_type {
        redirect = redirect.with_user_type(user_type);
    }
    if let Some(user_structure) = user_structure {
        redirect = redirect.with_user_structure(user_structure);
    }
    redirect.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    const BASE_URL: &str = "http://example.com/error";

    fn location_header(response: &HttpResponse) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .expect("redirect should carry a Location header")
            .to_str()
            .expect("Location should be valid ASCII")
    }

    #[test]
    fn test_redirects_with_reason_from_error() {
        let failure = Failure::new("ERROR_CODE", "").with_reason("Test error");

        let response = redirect_failure(BASE_URL, &failure, None, None);

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        // The reason passes through unencoded, space included
        assert_eq!(
            location_header(&response),
            "http://example.com/error?reason=Test error"
        );
    }

    #[test]
    fn test_falls_back_to_code_when_reason_missing() {
        let failure = Failure::new("ERROR_CODE", "");

        let response = redirect_failure(BASE_URL, &failure, None, None);

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            location_header(&response),
            "http://example.com/error?reason=ERROR_CODE"
        );
    }

    #[test]
    fn test_includes_user_type_when_provided() {
        let failure = Failure::new("ERROR_CODE", "");

        let response = redirect_failure(BASE_URL, &failure, Some(UserType::Conseiller), None);

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            location_header(&response),
            "http://example.com/error?reason=ERROR_CODE&typeUtilisateur=CONSEILLER"
        );
    }

    #[test]
    fn test_includes_user_structure_when_provided() {
        let failure = Failure::new("ERROR_CODE", "");

        let response =
            redirect_failure(BASE_URL, &failure, None, Some(UserStructure::FranceTravail));

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            location_header(&response),
            "http://example.com/error?reason=ERROR_CODE&structureUtilisateur=FRANCE_TRAVAIL"
        );
    }

    #[test]
    fn test_includes_all_user_information_in_fixed_order() {
        let failure = Failure::new("ERROR_CODE", "")
            .with_email("test@example.com")
            .with_nom("Doe")
            .with_prenom("John");

        let response = redirect_failure(
            BASE_URL,
            &failure,
            Some(UserType::Jeune),
            Some(UserStructure::FranceTravail),
        );

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            location_header(&response),
            "http://example.com/error?reason=ERROR_CODE&typeUtilisateur=JEUNE\
             &structureUtilisateur=FRANCE_TRAVAIL&email=test@example.com&nom=Doe&prenom=John"
        );
    }

    #[test]
    fn test_handles_empty_error_gracefully() {
        let failure = Failure::new("", "");

        let response = redirect_failure(BASE_URL, &failure, None, None);

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location_header(&response), "http://example.com/error?reason=");
    }
}
