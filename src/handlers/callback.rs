// Upstream authentication callback handler
use actix_web::{http::header, web, HttpResponse};
use log::{debug, error};
use serde::Deserialize;

use crate::models::{Failure, Outcome, UserStructure, UserType};
use crate::settings::RelaySettings;
use crate::utils::redirect::redirect_failure;

/// Query parameters forwarded by the upstream identity provider
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
    #[serde(rename = "typeUtilisateur")]
    pub user_type: Option<UserType>,
    #[serde(rename = "structureUtilisateur")]
    pub user_structure: Option<UserStructure>,
}

pub async fn auth_callback(
    query: web::Query<CallbackParams>,
    settings: web::Data<RelaySettings>,
) -> HttpResponse {
    let params = query.into_inner();
    debug!("Authentication callback received: {params:?}");

    match validate_callback(&params) {
        Outcome::Success(code) => {
            // Token exchange happens downstream; hand the code back to the
            // client web application as-is.
            let location = format!(
                "{}?code={code}",
                settings.callbacks.client_web_success_callback
            );
            HttpResponse::Found()
                .append_header((header::LOCATION, location))
                .finish()
        }
        Outcome::Failure(failure) => {
            error!("Authentication failed upstream: {}", failure.error.code);
            redirect_failure(
                &settings.callbacks.client_web_error_callback,
                &failure,
                params.user_type,
                params.user_structure,
            )
        }
    }
}

/// Check the upstream callback and extract the authorization code
fn validate_callback(params: &CallbackParams) -> Outcome<String> {
    if let Some(upstream_error) = &params.error {
        let message = params.error_description.as_deref().unwrap_or_default();
        return Outcome::Failure(Failure::new(upstream_error, message));
    }

    match &params.code {
        Some(code) => Outcome::Success(code.clone()),
        None => Outcome::Failure(Failure::new(
            "MISSING_CODE",
            "no authorization code in callback",
        )),
    }
}
