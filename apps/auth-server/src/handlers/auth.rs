//! Authentication handlers.
//!
//! Thin translation between HTTP and the auth service: every endpoint
//! answers 200 with a well-formed body, and the envelope carries the
//! outcome. The identity provider is the only party that judges tokens
//! or credentials.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};

use authgate_core::domain::{Credentials, UserProfile};
use authgate_shared::dto::{
    LoginRequest, LogoutRequest, LogoutResponse, RefreshRequest, RevokeRequest, RevokeResponse,
};
use authgate_shared::{Envelope, OperationError};

use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(state: web::Data<AppState>, body: web::Json<LoginRequest>) -> HttpResponse {
    let req = body.into_inner();
    let envelope = state
        .auth
        .login(Credentials::new(req.email, req.password))
        .await;

    HttpResponse::Ok().json(envelope)
}

/// POST /api/auth/refresh
pub async fn refresh(state: web::Data<AppState>, body: web::Json<RefreshRequest>) -> HttpResponse {
    let envelope = state.auth.refresh(&body.refresh_token).await;

    HttpResponse::Ok().json(envelope)
}

/// POST /api/auth/logout
pub async fn logout(state: web::Data<AppState>, body: web::Json<LogoutRequest>) -> HttpResponse {
    let logged_out = state.auth.logout(&body.id_token).await;

    HttpResponse::Ok().json(LogoutResponse { logged_out })
}

/// POST /api/auth/revoke
pub async fn revoke(state: web::Data<AppState>, body: web::Json<RevokeRequest>) -> HttpResponse {
    let revoked = state.auth.revoke(&body.token).await;

    HttpResponse::Ok().json(RevokeResponse { revoked })
}

/// GET /api/auth/profile - forwards the caller's bearer token upstream.
pub async fn profile(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let Some(token) = bearer_token(&req) else {
        return HttpResponse::Ok().json(Envelope::<UserProfile>::err(OperationError::new(
            401,
            "missing bearer token",
        )));
    };

    HttpResponse::Ok().json(state.auth.profile(token).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header.
fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
