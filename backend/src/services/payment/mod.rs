//! # Payment Relay Service Module
//!
//! This module groups the payment endpoints under the `/api/payment` path.
//! All of them share a single relay handler: the request body is forwarded
//! verbatim to the payment gateway and the gateway's JSON response comes back
//! to the caller with the gateway's own HTTP status code.
//!
//! The per-method differences (human-readable label for error messages,
//! upstream path on the gateway) live in the operation table in `relay`, so
//! adding a payment method means adding a table row, not another handler.
//!
//! ## Registered routes:
//!
//! *   **`POST /api/payment/blik`** — one-off BLIK payment.
//! *   **`POST /api/payment/payu`** — one-off PayU card payment.
//! *   **`POST /api/payment/payu/recurring`** — recurring PayU donation.

mod relay;

use actix_web::web::{post, scope};
use actix_web::Scope;

/// The base path for all payment relay endpoints.
const API_PATH: &str = "/api/payment";

/// Configures and returns the Actix `Scope` for the payment relay routes.
///
/// The tail match hands the method name to the relay handler, which resolves
/// it against the operation table; unknown methods get `404 Not Found`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/{method:.*}", post().to(relay::process))
}
