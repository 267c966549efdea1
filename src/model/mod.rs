//! API data transfer objects.
//!
//! Shapes of every JSON body the HTTP layer accepts or returns. Domain models in
//! `server::model` convert into these at the controller boundary.

pub mod api;
pub mod catalog;
pub mod favorite;
pub mod user;
