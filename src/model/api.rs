use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct ErrorDto {
    pub error: String,
}

/// A single documented route as listed by the sitemap.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct RouteDto {
    pub method: String,
    pub path: String,
}

/// Machine-readable listing of every documented route.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct SitemapDto {
    pub routes: Vec<RouteDto>,
}
