//! Path and query extractors whose rejections use the API error format

use axum::{
    extract::{FromRequestParts, Path as AxumPath, Query as AxumQuery},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// `axum::extract::Path` that rejects with a 422 validation error
#[derive(Debug)]
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        AxumPath::<T>::from_request_parts(parts, state)
            .await
            .map(|AxumPath(value)| Path(value))
            .map_err(|rejection| {
                ApiError::validation(format!("Invalid path parameter: {}", rejection.body_text()))
            })
    }
}

/// `axum::extract::Query` that rejects with a 422 validation error
#[derive(Debug)]
pub struct Query<T>(pub T);

impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        AxumQuery::<T>::from_request_parts(parts, state)
            .await
            .map(|AxumQuery(value)| Query(value))
            .map_err(|rejection| {
                ApiError::validation(format!("Invalid query parameter: {}", rejection.body_text()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Paging {
        skip: Option<u32>,
    }

    async fn query(uri: &str) -> Result<Query<Paging>, ApiError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        Query::<Paging>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_query_parses() {
        let Query(paging) = query("/tasks/?skip=3").await.unwrap();
        assert_eq!(paging.skip, Some(3));

        let Query(paging) = query("/tasks/").await.unwrap();
        assert_eq!(paging.skip, None);
    }

    #[tokio::test]
    async fn test_bad_query_is_422() {
        let err = query("/tasks/?skip=abc").await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);

        let err = query("/tasks/?skip=-1").await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
