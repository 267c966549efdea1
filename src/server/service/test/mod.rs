use crate::{
    model::catalog::CatalogKind,
    server::{
        error::AppError,
        model::favorite::FavoriteParam,
        service::{catalog::CatalogService, favorite::FavoriteService, user::UserService},
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
