use crate::data::item::ItemRepository;
use entity::prelude::{Item, ItemRequest, User};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_request;
mod get_by_owner;
mod search;
mod update;
