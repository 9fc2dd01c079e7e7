//! Player HTTP routes.

use actix_web::web;

use crate::error::AppError;
use crate::extractors::form_or_json::FormOrJson;
use crate::extractors::player_id::PlayerId;
use crate::services::players::{self, PlayerView, SpinRequest};
use crate::state::app_state::AppState;

/// GET /players/{id}
///
/// Returns the sanitized player state: id, name, credits, lifetime spins
/// and the derived lifetime average. The stored secret token is never part
/// of the response.
async fn read_player(
    player_id: PlayerId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<PlayerView>, AppError> {
    let view = players::read_player(&app_state.db, player_id.0).await?;
    Ok(web::Json(view))
}

/// PUT /players/{id}/spin
///
/// Applies one wheel-spin wager to the player and returns the refreshed,
/// sanitized state. The body carries `bet`, `winnings` and the `hash`
/// token proving the caller may mutate this player; it may be JSON or
/// form-encoded.
async fn spin(
    player_id: PlayerId,
    body: FormOrJson<SpinRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<PlayerView>, AppError> {
    let view = players::spin(&app_state.db, player_id.0, body.into_inner()).await?;
    Ok(web::Json(view))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{id}").route(web::get().to(read_player)));
    cfg.service(web::resource("/{id}/spin").route(web::put().to(spin)));
}
