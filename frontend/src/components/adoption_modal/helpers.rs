//! Helpers for the adoption dialog: payload assembly and the
//! authorization + payment round-trip against the backend relay.

use common::model::payment::AuthRelayResponse;
use common::payu::PayUAuthResponse;
use gloo_net::http::Request;
use serde_json::json;

/// Monthly adoption donation, in PLN.
pub const ADOPTION_AMOUNT_PLN: u32 = 15;

/// Builds the payment payload the gateway expects. The BLIK code travels as
/// raw digits, without the display grouping.
pub fn build_payment_payload(
    animal_name: &str,
    animal_species_id: Option<u32>,
    blik_code: &str,
) -> serde_json::Value {
    json!({
        "animalName": animal_name.trim(),
        "animalSpeciesId": animal_species_id,
        "blikCode": blik_code.replace(' ', ""),
        "amount": ADOPTION_AMOUNT_PLN,
        "recurring": true,
    })
}

/// Asks the backend for a PayU access token.
pub async fn authorize() -> Result<PayUAuthResponse, String> {
    let response = Request::post("/api/payu/auth")
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;

    match response
        .json::<AuthRelayResponse>()
        .await
        .map_err(|e| e.to_string())?
    {
        AuthRelayResponse::Granted { data, .. } => Ok(data),
        AuthRelayResponse::Denied { error, .. } => Err(error),
    }
}

/// Sends the payment payload through the BLIK relay endpoint and returns
/// the gateway's response body.
pub async fn submit_blik_payment(payload: &serde_json::Value) -> Result<serde_json::Value, String> {
    let response = Request::post("/api/payment/blik")
        .header("Content-Type", "application/json")
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let body: serde_json::Value = response.json().await.map_err(|e| e.to_string())?;
    if response.ok() {
        Ok(body)
    } else {
        Err(body
            .get("error")
            .and_then(|e| e.as_str())
            .unwrap_or("Payment processing failed")
            .to_string())
    }
}

/// Full adoption flow: authorize, then pay.
pub async fn adopt(payload: serde_json::Value) -> Result<serde_json::Value, String> {
    authorize().await?;
    submit_blik_payment(&payload).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_trimmed_name_and_ungrouped_code() {
        let payload = build_payment_payload(" Rex ", Some(17), "123 456");
        assert_eq!(payload["animalName"], "Rex");
        assert_eq!(payload["animalSpeciesId"], 17);
        assert_eq!(payload["blikCode"], "123456");
        assert_eq!(payload["amount"], ADOPTION_AMOUNT_PLN);
        assert_eq!(payload["recurring"], true);
    }
}
