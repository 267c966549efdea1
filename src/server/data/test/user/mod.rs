use crate::server::data::{favorite::FavoriteListRepository, user::UserRepository};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod exists;
mod find_by_id;
mod get_all;
