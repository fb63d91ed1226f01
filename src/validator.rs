//! JSON body extractors with uniform error mapping.
//!
//! [`JsonBody`] turns axum's JSON rejections into 400 [`AppError`]s with a
//! readable message. [`ValidatedJson`] additionally runs the `validator`
//! rules of the target type and reports every violated field.
//! [`LazyJson`] only buffers the body, so a handler can run its own checks
//! before the payload is judged.

use anyhow::anyhow;
use std::marker::PhantomData;

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use notebook_core::AppError;

fn map_rejection(rejection: JsonRejection) -> AppError {
    let error_msg = rejection.body_text();

    if error_msg.contains("missing field") {
        let field = error_msg
            .split("missing field `")
            .nth(1)
            .and_then(|s| s.split('`').next())
            .unwrap_or("unknown");
        return AppError::bad_request(anyhow!("{} is required", field));
    }

    if error_msg.contains("invalid type") {
        return AppError::bad_request(anyhow!("Invalid field type in request"));
    }

    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::bad_request(anyhow!(
            "Missing 'Content-Type: application/json' header"
        ));
    }

    AppError::bad_request(anyhow!("Invalid request body"))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(map_rejection)?;

        Ok(JsonBody(value))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;

        value
            .validate()
            .map_err(|errors| AppError::validation(&errors))?;

        Ok(ValidatedJson(value))
    }
}

/// Raw request body, deserialized on demand with [`LazyJson::parse`].
///
/// An empty body parses as `{}`. The `Content-Type` header is not checked.
#[derive(Debug, Clone)]
pub struct LazyJson<T> {
    bytes: Bytes,
    _marker: PhantomData<T>,
}

impl<T> LazyJson<T> {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
            _marker: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> LazyJson<T> {
    pub fn parse(&self) -> Result<T, AppError> {
        let bytes: &[u8] = if self.bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &self.bytes
        };

        let Json(value) = Json::<T>::from_bytes(bytes).map_err(map_rejection)?;
        Ok(value)
    }
}

impl<T, S> FromRequest<S> for LazyJson<T>
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::bad_request(anyhow!("Invalid request body")))?;

        Ok(LazyJson::new(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Payload {
        #[serde(default)]
        title: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Required {
        title: String,
    }

    #[test]
    fn test_lazy_json_empty_body_is_empty_object() {
        assert_eq!(LazyJson::<Payload>::new("").parse().unwrap(), Payload::default());
        assert_eq!(LazyJson::<Payload>::new(" \n").parse().unwrap(), Payload::default());
    }

    #[test]
    fn test_lazy_json_parses_fields() {
        let payload = LazyJson::<Payload>::new(r#"{"title":"New"}"#).parse().unwrap();
        assert_eq!(payload.title.as_deref(), Some("New"));
    }

    #[test]
    fn test_lazy_json_wrong_type_is_bad_request() {
        let err = LazyJson::<Payload>::new(r#"{"title":5}"#).parse().unwrap_err();
        assert_eq!(err.status.as_u16(), 400);
        assert_eq!(err.message(), "Invalid field type in request");
    }

    #[test]
    fn test_lazy_json_missing_field_is_named() {
        let err = LazyJson::<Required>::new("{}").parse().unwrap_err();
        assert_eq!(err.message(), "title is required");
    }

    #[test]
    fn test_lazy_json_syntax_error_is_bad_request() {
        let err = LazyJson::<Payload>::new("{not json").parse().unwrap_err();
        assert_eq!(err.status.as_u16(), 400);
    }
}
