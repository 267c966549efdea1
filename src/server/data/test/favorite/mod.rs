use crate::{model::catalog::CatalogKind, server::data::favorite::FavoriteListRepository};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod add_item;
mod delete_by_user_id;
mod get_by_user_ids;
mod get_or_create;
mod remove_item;
