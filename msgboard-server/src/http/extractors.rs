//! Custom Axum extractors

use axum::extract::rejection::FormRejection;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;
use serde::Deserialize;

use super::error::ApiError;

/// Form field carrying the submitted text
const NEW_MESSAGE_FIELD: &str = "new_message";

#[derive(Debug, Deserialize)]
struct SubmitFields {
    new_message: Option<String>,
}

/// The `new_message` field of a submitted form, if present.
///
/// Reads urlencoded and multipart bodies. Any other body, including an empty
/// one without a content type, counts as a form without the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage(pub Option<String>);

impl<S> FromRequest<S> for NewMessage
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            return from_multipart(req, state).await;
        }

        match Form::<SubmitFields>::from_request(req, state).await {
            Ok(Form(fields)) => Ok(Self(fields.new_message)),
            Err(FormRejection::InvalidFormContentType(_)) => Ok(Self(None)),
            Err(e) => Err(ApiError::BadRequest {
                message: e.body_text(),
            }),
        }
    }
}

async fn from_multipart<S>(req: Request, state: &S) -> Result<NewMessage, ApiError>
where
    S: Send + Sync,
{
    let mut multipart = Multipart::from_request(req, state)
        .await
        .map_err(|e| ApiError::BadRequest {
            message: e.body_text(),
        })?;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        if field.name() == Some(NEW_MESSAGE_FIELD) {
            let text = field.text().await.map_err(bad_multipart)?;
            return Ok(NewMessage(Some(text)));
        }
    }

    Ok(NewMessage(None))
}

fn bad_multipart(e: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::BadRequest {
        message: e.body_text(),
    }
}
