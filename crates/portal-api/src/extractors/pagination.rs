//! Pagination extractor
//!
//! Extracts offset pagination parameters from query strings and clamps them
//! to sane bounds before they reach a repository.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use portal_core::traits::Page;
use serde::Deserialize;

use crate::response::ApiError;

/// Default page size
const DEFAULT_PER_PAGE: u32 = 20;
/// Maximum page size
const MAX_PER_PAGE: u32 = 100;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// 1-based page index
    #[serde(default)]
    pub page: Option<u32>,
    /// Items per page
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// Validated pagination parameters
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Convert to the domain page request
    pub fn to_page(self) -> Page {
        Page::new(self.page, self.per_page)
    }
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self {
            page: params.page.unwrap_or(1).max(1),
            per_page: params
                .per_page
                .unwrap_or(DEFAULT_PER_PAGE)
                .clamp(1, MAX_PER_PAGE),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(Pagination::from(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pagination() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.per_page, DEFAULT_PER_PAGE);
    }

    #[test]
    fn test_per_page_clamping() {
        let pagination = Pagination::from(PaginationParams {
            page: Some(0),
            per_page: Some(500),
        });
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.per_page, MAX_PER_PAGE);
    }

    #[test]
    fn test_to_page_offset() {
        let pagination = Pagination::from(PaginationParams {
            page: Some(3),
            per_page: Some(10),
        });
        assert_eq!(pagination.to_page().offset(), 20);
    }
}
