//! # Payment Relay Handler
//!
//! One handler serves every payment method. The contract, per operation:
//!
//! 1.  **HTTP Request**: `process` receives the raw POST body and the method
//!     name from the URL tail (`blik`, `payu`, `payu/recurring`).
//!
//! 2.  **Validation**: the body must parse as JSON. The relay enforces no
//!     schema beyond that — the payload belongs to the gateway.
//!
//! 3.  **Forwarding**: the *original* bytes are POSTed to the gateway URL for
//!     the operation, never a re-serialization, so the forwarded body is
//!     byte-for-byte what the browser sent.
//!
//! 4.  **HTTP Response**: the gateway's JSON body is returned with the
//!     gateway's status code. Any failure along the way (malformed request
//!     JSON, gateway unreachable, gateway returned non-JSON) collapses to
//!     `500` with `{ "error": "<label> processing failed" }`; the underlying
//!     cause is logged server-side only.
//!
//! No retries, no idempotency keys, no relay-side timeout: each request is
//! stateless and independent.

use crate::config::GatewayConfig;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder};
use common::model::payment::ErrorBody;
use log::{debug, warn};

/// One row of the relay configuration: a routable payment method.
pub struct PaymentOperation {
    /// Method name as it appears under `/api/payment/`.
    pub method: &'static str,
    /// Human-readable label used in the client-facing failure message.
    pub label: &'static str,
    /// Upstream path on the gateway, appended to the configured base URL.
    pub upstream_path: &'static str,
}

/// The supported payment methods. Adding a method is adding a row here.
pub const OPERATIONS: &[PaymentOperation] = &[
    PaymentOperation {
        method: "blik",
        label: "BLIK payment",
        upstream_path: "/api/payment/payu/payment/blik",
    },
    PaymentOperation {
        method: "payu",
        label: "Payment",
        upstream_path: "/api/payment/payu",
    },
    PaymentOperation {
        method: "payu/recurring",
        label: "Recurring payment",
        upstream_path: "/api/payment/payu/recurring",
    },
];

/// Resolves a method name from the URL against the operation table.
pub fn lookup(method: &str) -> Option<&'static PaymentOperation> {
    OPERATIONS.iter().find(|op| op.method == method)
}

/// Actix web handler for `POST /api/payment/{method}`.
///
/// Unknown methods return `404`. Everything else is delegated to `forward`;
/// on any error the response is the fixed-shape `500` failure body for the
/// operation.
pub(crate) async fn process(
    config: web::Data<GatewayConfig>,
    method: web::Path<String>,
    body: web::Bytes,
) -> impl Responder {
    let Some(op) = lookup(&method) else {
        return HttpResponse::NotFound().json(ErrorBody {
            error: format!("Unknown payment method: {}", method),
        });
    };

    match forward(&config, op, &body).await {
        Ok((status, result)) => HttpResponse::build(status).json(result),
        Err(e) => {
            warn!("{} relay failed: {}", op.label, e);
            HttpResponse::InternalServerError().json(ErrorBody::processing_failed(op.label))
        }
    }
}

/// Validates the payload and relays it to the gateway.
///
/// Returns the gateway's status code and parsed JSON body. The error string
/// is for the server log; callers map any `Err` to the generic failure shape.
async fn forward(
    config: &GatewayConfig,
    op: &PaymentOperation,
    body: &web::Bytes,
) -> Result<(StatusCode, serde_json::Value), String> {
    let payload: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| format!("malformed request body: {}", e))?;
    debug!("{} payload: {}", op.label, payload);

    let url = format!("{}{}", config.base_url, op.upstream_path);
    let response = reqwest::Client::new()
        .post(&url)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .body(body.to_vec())
        .send()
        .await
        .map_err(|e| format!("request to {} failed: {}", url, e))?;

    // actix and reqwest sit on different `http` major versions, so the
    // status crosses over as a bare u16.
    let status = StatusCode::from_u16(response.status().as_u16())
        .map_err(|e| format!("invalid upstream status: {}", e))?;
    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("gateway returned a non-JSON body: {}", e))?;

    Ok((status, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::payment::configure_routes;
    use actix_web::{test, App, HttpServer};
    use serde_json::json;
    use std::sync::Mutex;
    use std::time::Duration;

    fn app_config(base_url: &str) -> web::Data<GatewayConfig> {
        web::Data::new(GatewayConfig {
            base_url: base_url.to_string(),
        })
    }

    /// Starts a loopback stand-in for the payment gateway. It records the raw
    /// bytes of the last BLIK request, answers BLIK with `200 {"ok":true}`
    /// and one-off PayU with `402 {"success":false}`.
    async fn spawn_gateway() -> (String, web::Data<Mutex<Vec<u8>>>) {
        let seen = web::Data::new(Mutex::new(Vec::new()));
        let seen_for_app = seen.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(seen_for_app.clone())
                .route(
                    "/api/payment/payu/payment/blik",
                    web::post().to(
                        |body: web::Bytes, seen: web::Data<Mutex<Vec<u8>>>| async move {
                            *seen.lock().unwrap() = body.to_vec();
                            HttpResponse::Ok().json(json!({ "ok": true }))
                        },
                    ),
                )
                .route(
                    "/api/payment/payu",
                    web::post().to(|| async {
                        HttpResponse::PaymentRequired().json(json!({ "success": false }))
                    }),
                )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        actix_web::rt::time::sleep(Duration::from_millis(100)).await;
        (format!("http://{}", addr), seen)
    }

    // `use actix_web::test` shadows the built-in attribute, so qualify it.
    #[core::prelude::v1::test]
    fn operation_table_covers_the_three_methods() {
        assert_eq!(lookup("blik").unwrap().label, "BLIK payment");
        assert_eq!(lookup("payu").unwrap().label, "Payment");
        assert_eq!(
            lookup("payu/recurring").unwrap().upstream_path,
            "/api/payment/payu/recurring"
        );
        assert!(lookup("stripe").is_none());
    }

    #[actix_web::test]
    async fn forwards_the_received_bytes_and_relays_the_gateway_response() {
        let (base_url, seen) = spawn_gateway().await;
        let app = test::init_service(
            App::new()
                .app_data(app_config(&base_url))
                .service(configure_routes()),
        )
        .await;

        // Odd spacing on purpose: a re-serialization would normalize it.
        let payload = br#"{ "blikCode": "123 456",  "amount": 15 }"#.to_vec();
        let req = test::TestRequest::post()
            .uri("/api/payment/blik")
            .insert_header(("Content-Type", "application/json"))
            .set_payload(payload.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "ok": true }));
        assert_eq!(*seen.lock().unwrap(), payload);
    }

    #[actix_web::test]
    async fn relays_non_success_gateway_status_codes_unchanged() {
        let (base_url, _seen) = spawn_gateway().await;
        let app = test::init_service(
            App::new()
                .app_data(app_config(&base_url))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/payment/payu")
            .set_payload(r#"{"amount":15}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::PAYMENT_REQUIRED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": false }));
    }

    #[actix_web::test]
    async fn malformed_json_collapses_to_the_generic_failure() {
        // Gateway deliberately unreachable: the body must be rejected before
        // any forwarding happens.
        let app = test::init_service(
            App::new()
                .app_data(app_config("http://127.0.0.1:1"))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/payment/blik")
            .set_payload("definitely not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "BLIK payment processing failed");
    }

    #[actix_web::test]
    async fn unreachable_gateway_collapses_to_the_generic_failure() {
        let app = test::init_service(
            App::new()
                .app_data(app_config("http://127.0.0.1:1"))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/payment/payu")
            .set_payload(r#"{"amount":15}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "Payment processing failed");
    }

    #[actix_web::test]
    async fn unknown_methods_get_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(app_config("http://127.0.0.1:1"))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/payment/stripe")
            .set_payload(r#"{}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
