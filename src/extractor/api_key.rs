use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::{
    auth,
    error::{ApiError, AuthHeaderError},
    traits::StateProvider,
    types::used_api_key::UsedApiKey,
};

/// Extracts the API key from the `Authorization` header of the request.
///
/// The key is not validated, only extracted. See [`auth::get_api_key`] for
/// the accepted header shape.
#[derive(Debug, Clone)]
pub struct ApiKey(pub UsedApiKey);

#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync + StateProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "api_key_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let verbosity = state.error_verbosity();

        let used_api_key = auth::get_api_key(&parts.headers).map_err(|err| {
            tracing::warn!(%err, "Rejection. Authorization header is not a valid ApiKey credential");

            AuthHeaderError::new(verbosity, err.into())
        })?;

        tracing::trace!(%used_api_key, "Extracted");

        Ok(ApiKey(UsedApiKey { used_api_key }))
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::FromRequestParts,
        http::{header::AUTHORIZATION, Request, StatusCode},
        response::IntoResponse,
    };

    use super::ApiKey;
    use crate::{error::ErrorVerbosity, state::ApiState};

    fn parts_with_authorization(value: Option<&str>) -> axum::http::request::Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = value {
            builder = builder.header(AUTHORIZATION, value);
        }

        let (parts, ()) = builder.body(()).expect("Failed to build request").into_parts();

        parts
    }

    #[tokio::test]
    async fn extracts_key() {
        let state = ApiState::new(ErrorVerbosity::Full);
        let mut parts = parts_with_authorization(Some("ApiKey myapikey123"));

        let ApiKey(used_api_key) = ApiKey::from_request_parts(&mut parts, &state)
            .await
            .expect("Extraction failed");

        assert_eq!(used_api_key.used_api_key, "myapikey123");
    }

    #[tokio::test]
    async fn extracts_empty_key_on_trailing_space() {
        let state = ApiState::new(ErrorVerbosity::Full);
        let mut parts = parts_with_authorization(Some("ApiKey "));

        let ApiKey(used_api_key) = ApiKey::from_request_parts(&mut parts, &state)
            .await
            .expect("Extraction failed");

        assert_eq!(used_api_key.used_api_key, "");
    }

    #[tokio::test]
    async fn missing_header_rejects_unauthorized() {
        let state = ApiState::new(ErrorVerbosity::Full);
        let mut parts = parts_with_authorization(None);

        let rejection = ApiKey::from_request_parts(&mut parts, &state)
            .await
            .expect_err("Extraction should have failed");

        let response = rejection.into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response
                .headers()
                .get("WWW-Authenticate")
                .map(|value| value.as_bytes()),
            Some("ApiKey".as_bytes())
        );
    }

    #[tokio::test]
    async fn wrong_scheme_rejects_bad_request() {
        let state = ApiState::new(ErrorVerbosity::Full);
        let mut parts = parts_with_authorization(Some("Bearer sometoken"));

        let rejection = ApiKey::from_request_parts(&mut parts, &state)
            .await
            .expect_err("Extraction should have failed");

        let response = rejection.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get("WWW-Authenticate").is_none());
    }

    #[tokio::test]
    async fn scheme_without_key_rejects_bad_request() {
        let state = ApiState::new(ErrorVerbosity::Full);
        let mut parts = parts_with_authorization(Some("ApiKey"));

        let rejection = ApiKey::from_request_parts(&mut parts, &state)
            .await
            .expect_err("Extraction should have failed");

        let response = rejection.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn none_verbosity_rejects_no_content() {
        let state = ApiState::new(ErrorVerbosity::None);
        let mut parts = parts_with_authorization(None);

        let rejection = ApiKey::from_request_parts(&mut parts, &state)
            .await
            .expect_err("Extraction should have failed");

        let response = rejection.into_response();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
