use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Kind of catalog entry a favorite can point at.
///
/// Deserialized from the `{kind}` path segment of the favorite routes, so the
/// serialized names are the singular lowercase forms (`character`, `planet`, `vehicle`).
#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Character,
    Planet,
    Vehicle,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 3] = [
        CatalogKind::Character,
        CatalogKind::Planet,
        CatalogKind::Vehicle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Planet => "planet",
            Self::Vehicle => "vehicle",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized character, planet or vehicle.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CatalogItemDto {
    pub id: i32,
    pub name: String,
    pub description: String,
}
