use crate::payu::PayUAuthResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The fixed-shape failure body returned by the payment relay endpoints.
///
/// Whatever goes wrong server-side (malformed request body, gateway
/// unreachable, gateway returned a non-JSON body), the caller only ever sees
/// this shape with HTTP status 500. Gateway error details are logged on the
/// backend and never forwarded to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// Builds the canonical relay failure body for an operation label,
    /// e.g. `"BLIK payment"` becomes `"BLIK payment processing failed"`.
    pub fn processing_failed(label: &str) -> Self {
        Self {
            error: format!("{} processing failed", label),
        }
    }
}

/// Response shape of the `POST /api/payu/auth` endpoint, shared between the
/// backend handler that produces it and the frontend adoption flow that
/// consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthRelayResponse {
    /// Authorization succeeded; carries the PayU token payload.
    Granted {
        success: bool,
        data: PayUAuthResponse,
    },
    /// Authorization failed; `details` carries the gateway's error body when
    /// one was available.
    Denied {
        success: bool,
        error: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<Value>,
    },
}

impl AuthRelayResponse {
    pub fn granted(data: PayUAuthResponse) -> Self {
        Self::Granted {
            success: true,
            data,
        }
    }

    pub fn denied(error: impl Into<String>) -> Self {
        Self::Denied {
            success: false,
            error: error.into(),
            details: None,
        }
    }

    pub fn denied_with_details(error: impl Into<String>, details: Value) -> Self {
        Self::Denied {
            success: false,
            error: error.into(),
            details: Some(details),
        }
    }
}
