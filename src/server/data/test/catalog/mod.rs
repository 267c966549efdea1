use crate::{model::catalog::CatalogKind, server::data::catalog::CatalogRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod exists;
mod get_all;
mod get_by_id;
mod get_by_ids;
