//! # PayU OAuth2 Authorization Relay
//!
//! Backend half of the adoption payment flow: before the browser submits a
//! payment it asks this endpoint for a PayU access token. The endpoint runs
//! the `client_credentials` grant against the configured PayU environment
//! (sandbox by default) and relays the outcome.
//!
//! Response contract:
//! - credentials missing           → `500 { success: false, error: "Configuration error" }`
//! - PayU rejected the grant       → `500 { success: false, error: "PayU authorization failed", details: <PayU body> }`
//! - transport failure             → `500 { success: false, error: "Authorization request failed" }`
//! - 2xx but unexpected body shape → `500 { success: false, error: "Invalid response from PayU" }`
//! - success                       → `200 { success: true, data: <token payload> }`

use actix_web::{web, HttpResponse, Responder};
use common::model::payment::AuthRelayResponse;
use common::payu::{
    PayUAuthRequest, PayUAuthResponse, PayUConfig, PayUErrorResponse, PayUGrantType,
};
use log::{info, warn};

/// How an authorization attempt failed; each variant maps to one
/// client-facing error string.
enum AuthError {
    Request(String),
    Rejected(serde_json::Value),
    InvalidResponse(String),
}

/// Actix web handler for `POST /api/payu/auth`.
pub(crate) async fn process(config: web::Data<PayUConfig>) -> impl Responder {
    if !config.is_configured() {
        warn!("PayU credentials are not configured");
        return HttpResponse::InternalServerError()
            .json(AuthRelayResponse::denied("Configuration error"));
    }

    match authorize(&config).await {
        Ok(data) => {
            info!(
                "PayU authorization response: {}",
                serde_json::to_string_pretty(&data).unwrap_or_default()
            );
            HttpResponse::Ok().json(AuthRelayResponse::granted(data))
        }
        Err(AuthError::Rejected(details)) => {
            warn!("PayU rejected the authorization: {}", details);
            HttpResponse::InternalServerError().json(AuthRelayResponse::denied_with_details(
                "PayU authorization failed",
                details,
            ))
        }
        Err(AuthError::Request(e)) => {
            warn!("PayU authorization request failed: {}", e);
            HttpResponse::InternalServerError()
                .json(AuthRelayResponse::denied("Authorization request failed"))
        }
        Err(AuthError::InvalidResponse(e)) => {
            warn!("PayU returned an unexpected body: {}", e);
            HttpResponse::InternalServerError()
                .json(AuthRelayResponse::denied("Invalid response from PayU"))
        }
    }
}

/// Runs the client_credentials grant against the configured environment.
async fn authorize(config: &PayUConfig) -> Result<PayUAuthResponse, AuthError> {
    let request = PayUAuthRequest {
        grant_type: PayUGrantType::ClientCredentials,
        client_id: config.client_id.clone(),
        client_secret: config.client_secret.clone(),
        email: None,
        ext_customer_id: None,
        firm_id: None,
    };
    request.validate().map_err(AuthError::Request)?;

    let form = format!(
        "grant_type={}&client_id={}&client_secret={}",
        request.grant_type.as_str(),
        request.client_id,
        request.client_secret
    );

    let response = reqwest::Client::new()
        .post(config.auth_url())
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form)
        .send()
        .await
        .map_err(|e| AuthError::Request(e.to_string()))?;

    if !response.status().is_success() {
        let details: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;
        if let Ok(parsed) = serde_json::from_value::<PayUErrorResponse>(details.clone()) {
            warn!(
                "PayU error {}: {}",
                parsed.error,
                parsed.error_description.as_deref().unwrap_or("-")
            );
        }
        return Err(AuthError::Rejected(details));
    }

    response
        .json::<PayUAuthResponse>()
        .await
        .map_err(|e| AuthError::InvalidResponse(e.to_string()))
}
