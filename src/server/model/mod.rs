//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Conversion to DTOs is the
//! serialization layer: a pure function over already-loaded data.

pub mod catalog;
pub mod favorite;
pub mod user;
