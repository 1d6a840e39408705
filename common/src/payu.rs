//! PayU EMEA OAuth2 authorization models.
//!
//! Request/response shapes for the `pl/standard/user/oauth/authorize`
//! endpoint, shared between the backend relay (`/api/payu/auth`) and the
//! frontend adoption flow. Grant-specific required fields follow the PayU
//! EMEA documentation: `client_credentials` needs only the client pair,
//! `trusted_merchant` additionally needs `email` + `extCustomerId`, and
//! `partner` needs `firm_id`.

use serde::{Deserialize, Serialize};

/// OAuth2 grant types supported by PayU EMEA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayUGrantType {
    ClientCredentials,
    TrustedMerchant,
    Partner,
}

impl PayUGrantType {
    /// Wire form used in the form-urlencoded authorization request.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayUGrantType::ClientCredentials => "client_credentials",
            PayUGrantType::TrustedMerchant => "trusted_merchant",
            PayUGrantType::Partner => "partner",
        }
    }
}

/// OAuth2 authorization request.
///
/// The optional fields only matter for the grant types that require them;
/// extra fields supplied for other grants are ignored rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayUAuthRequest {
    pub grant_type: PayUGrantType,
    pub client_id: String,
    pub client_secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        rename = "extCustomerId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ext_customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firm_id: Option<String>,
}

impl PayUAuthRequest {
    /// Checks the fields required by the request's grant type.
    pub fn validate(&self) -> Result<(), String> {
        if self.client_id.trim().is_empty() {
            return Err("Client ID is required".to_string());
        }
        if self.client_secret.trim().is_empty() {
            return Err("Client secret is required".to_string());
        }
        match self.grant_type {
            PayUGrantType::ClientCredentials => Ok(()),
            PayUGrantType::TrustedMerchant => {
                match &self.email {
                    Some(email) if email.contains('@') => {}
                    _ => {
                        return Err(
                            "Valid email is required for trusted_merchant grant".to_string()
                        );
                    }
                }
                match &self.ext_customer_id {
                    Some(id) if !id.trim().is_empty() => Ok(()),
                    _ => Err(
                        "External customer ID is required for trusted_merchant grant".to_string(),
                    ),
                }
            }
            PayUGrantType::Partner => match &self.firm_id {
                Some(id) if !id.trim().is_empty() => Ok(()),
                _ => Err("Firm ID is required for partner grant".to_string()),
            },
        }
    }
}

/// Successful authorization response returned by PayU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayUAuthResponse {
    pub access_token: String,
    /// Always `"bearer"` for this endpoint.
    pub token_type: String,
    pub expires_in: u64,
    pub grant_type: PayUGrantType,
}

/// Error body returned by PayU on a rejected authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayUErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_uri: Option<String>,
}

/// Endpoint pair for one PayU environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayUUrls {
    pub auth: &'static str,
    pub api: &'static str,
}

/// PayU deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayUEnvironment {
    Sandbox,
    Production,
}

impl PayUEnvironment {
    /// Parses the `PAYU_ENVIRONMENT` value; anything other than
    /// `"production"` falls back to the sandbox.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            PayUEnvironment::Production
        } else {
            PayUEnvironment::Sandbox
        }
    }

    pub fn urls(&self) -> PayUUrls {
        match self {
            PayUEnvironment::Sandbox => PayUUrls {
                auth: "https://secure.snd.payu.com/pl/standard/user/oauth/authorize",
                api: "https://secure.snd.payu.com/api/v2_1",
            },
            PayUEnvironment::Production => PayUUrls {
                auth: "https://secure.payu.com/pl/standard/user/oauth/authorize",
                api: "https://secure.payu.com/api/v2_1",
            },
        }
    }
}

/// Merchant-side PayU configuration, read from the environment on the
/// backend. `base_url`, when set, overrides the environment's authorization
/// URL (used for sandboxed deployments behind a proxy and for tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayUConfig {
    pub client_id: String,
    pub client_secret: String,
    pub environment: PayUEnvironment,
    pub base_url: Option<String>,
}

impl PayUConfig {
    /// True iff both credentials are present.
    pub fn is_configured(&self) -> bool {
        !self.client_id.trim().is_empty() && !self.client_secret.trim().is_empty()
    }

    /// The authorization endpoint to call, honoring the `base_url` override.
    pub fn auth_url(&self) -> String {
        match &self.base_url {
            Some(base) => format!("{}/pl/standard/user/oauth/authorize", base),
            None => self.environment.urls().auth.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(grant_type: PayUGrantType) -> PayUAuthRequest {
        PayUAuthRequest {
            grant_type,
            client_id: "145227".to_string(),
            client_secret: "12f071174cb7eb79d4aac5bc2f07563f".to_string(),
            email: None,
            ext_customer_id: None,
            firm_id: None,
        }
    }

    #[test]
    fn grant_type_uses_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&PayUGrantType::ClientCredentials).unwrap(),
            "\"client_credentials\""
        );
        assert_eq!(
            serde_json::from_str::<PayUGrantType>("\"trusted_merchant\"").unwrap(),
            PayUGrantType::TrustedMerchant
        );
        assert_eq!(PayUGrantType::Partner.as_str(), "partner");
    }

    #[test]
    fn client_credentials_requires_only_the_client_pair() {
        assert!(request(PayUGrantType::ClientCredentials).validate().is_ok());

        let mut missing_secret = request(PayUGrantType::ClientCredentials);
        missing_secret.client_secret = String::new();
        assert!(missing_secret.validate().is_err());
    }

    #[test]
    fn trusted_merchant_requires_email_and_ext_customer_id() {
        let mut req = request(PayUGrantType::TrustedMerchant);
        assert!(req.validate().is_err());

        req.email = Some("donor@example.com".to_string());
        assert!(req.validate().is_err());

        req.ext_customer_id = Some("ext-77".to_string());
        assert!(req.validate().is_ok());

        req.email = Some("not-an-email".to_string());
        assert!(req.validate().is_err());
    }

    #[test]
    fn partner_requires_firm_id() {
        let mut req = request(PayUGrantType::Partner);
        assert!(req.validate().is_err());

        req.firm_id = Some("firm-1".to_string());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn ext_customer_id_keeps_its_camel_case_wire_name() {
        let mut req = request(PayUGrantType::TrustedMerchant);
        req.email = Some("donor@example.com".to_string());
        req.ext_customer_id = Some("ext-77".to_string());
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["extCustomerId"], "ext-77");
    }

    #[test]
    fn environment_urls_and_overrides() {
        assert_eq!(
            PayUEnvironment::parse("production"),
            PayUEnvironment::Production
        );
        assert_eq!(PayUEnvironment::parse("anything"), PayUEnvironment::Sandbox);
        assert!(
            PayUEnvironment::Sandbox
                .urls()
                .auth
                .starts_with("https://secure.snd.payu.com")
        );

        let config = PayUConfig {
            client_id: "145227".to_string(),
            client_secret: "secret".to_string(),
            environment: PayUEnvironment::Sandbox,
            base_url: Some("http://127.0.0.1:9123".to_string()),
        };
        assert!(config.is_configured());
        assert_eq!(
            config.auth_url(),
            "http://127.0.0.1:9123/pl/standard/user/oauth/authorize"
        );
    }
}
