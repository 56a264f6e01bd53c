use crate::data::request::RequestRepository;
use chrono::{Duration, Utc};
use entity::prelude::{ItemRequest, User};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_requester;
mod find_others;
