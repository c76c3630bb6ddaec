//! Session extractors for Axum handlers.
//!
//! Identity comes from the process's [`SessionStore`], never from ambient
//! globals. Handlers declare what they need as an extractor parameter:
//! [`SessionUser`] for any signed-in user, [`RequireAdmin`] for
//! administrator-only surfaces.
//!
//! [`SessionStore`]: crate::session::SessionStore

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use telas_core::error::CoreError;
use telas_core::role::Role;
use telas_data::models::UserAccount;

use crate::error::AppError;
use crate::state::AppState;

/// The signed-in user. Rejects with 401 when no session exists.
#[derive(Debug, Clone)]
pub struct SessionUser(pub UserAccount);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .sessions
            .current()
            .map(SessionUser)
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Not signed in".into())))
    }
}

/// The signed-in administrator. Rejects with 401 when no session exists and
/// 403 for technicians.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub UserAccount);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let SessionUser(user) = SessionUser::from_request_parts(parts, state).await?;
        match user.perfil {
            Role::Administrador => Ok(RequireAdmin(user)),
            Role::Tecnico => Err(AppError::Core(CoreError::Forbidden(
                "Administrator role required".into(),
            ))),
        }
    }
}
