//! JSON body extraction with structured rejections.

use crate::api::ApiError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON request body.
///
/// An empty body decodes as `T::default()`, so endpoints whose fields are
/// all optional report their own "required" errors. The `Content-Type`
/// header is not inspected. Undecodable bodies become
/// [`ApiError::MalformedBody`].
#[derive(Debug, Clone, Default)]
pub(crate) struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }
        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|err| ApiError::MalformedBody(err.to_string()))
    }
}
