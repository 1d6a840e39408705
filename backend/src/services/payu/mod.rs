//! # PayU Authorization Service Module
//!
//! Groups the PayU OAuth2 endpoints under `/api/payu`.
//!
//! ## Registered routes:
//!
//! *   **`POST /api/payu/auth`**:
//!     - **Handler**: `auth::process`
//!     - **Description**: Exchanges the merchant's client credentials for a
//!       bearer token at the PayU authorization endpoint and returns the
//!       token payload to the browser wrapped in the `success`/`error`
//!       relay shape. The merchant credentials never leave the server.

mod auth;

use actix_web::web::{post, scope};
use actix_web::Scope;

/// The base path for PayU authorization endpoints.
const API_PATH: &str = "/api/payu";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/auth", post().to(auth::process))
}
