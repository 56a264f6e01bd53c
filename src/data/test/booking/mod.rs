use crate::{
    data::booking::BookingRepository,
    model::booking::{BookingStatus, StateFilter},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_for_booker;
mod find_for_owner;
mod set_status;
