use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Player id extracted from the `{id}` route path parameter.
///
/// Must parse as a positive integer. Existence is not checked here; the
/// handlers' own lookups produce the 404.
#[derive(Debug, Clone, Copy)]
pub struct PlayerId(pub i64);

impl FromRequest for PlayerId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse(req))
    }
}

fn parse(req: &HttpRequest) -> Result<PlayerId, AppError> {
    let raw = req.match_info().get("id").ok_or_else(|| {
        AppError::bad_request(
            ErrorCode::InvalidPlayerId,
            "Missing id parameter".to_string(),
        )
    })?;

    let player_id = raw.parse::<i64>().map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidPlayerId,
            format!("Invalid player id: {raw}"),
        )
    })?;

    if player_id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidPlayerId,
            format!("Player id must be positive, got: {player_id}"),
        ));
    }

    Ok(PlayerId(player_id))
}
