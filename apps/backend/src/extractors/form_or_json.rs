use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Request-body extractor accepting either JSON or form-encoded payloads.
///
/// The content type selects the parser: `application/x-www-form-urlencoded`
/// bodies go through the form deserializer, everything else is treated as
/// JSON. Deserialization failures become the canonical bad-request problem
/// body instead of the framework default.
#[derive(Debug)]
pub struct FormOrJson<T>(pub T);

impl<T> FormOrJson<T> {
    /// Extract the inner value from the wrapper
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for FormOrJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for FormOrJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for FormOrJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        // Extract content type before creating the async future to avoid
        // borrowing the request across an await point.
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("")
            .to_string();

        Box::pin(async move {
            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(error = %e, "failed to read request body chunk");
                    AppError::bad_request(
                        ErrorCode::BadRequest,
                        "Failed to read request body".to_string(),
                    )
                })?;
                body.extend_from_slice(&chunk);
            }

            let parsed = if content_type.starts_with("application/x-www-form-urlencoded") {
                serde_urlencoded::from_bytes::<T>(&body).map_err(|e| e.to_string())
            } else {
                serde_json::from_slice::<T>(&body).map_err(|e| e.to_string())
            };

            parsed.map(FormOrJson).map_err(|detail| {
                warn!(content_type = %content_type, "failed to deserialize request body");
                AppError::bad_request(
                    ErrorCode::BadRequest,
                    format!("Invalid request body: {detail}"),
                )
            })
        })
    }
}
