use entity::{location, sea_orm_active_enums::LocationType};
use sea_orm::{ActiveValue, ColumnTrait, DbErr};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{
        query::{apply_filters, apply_sort},
        soft_delete::SoftDeleteRepository,
    },
    model::{location::UpdateLocationParams, pagination::PageRequest},
    util::query::{parse_filter, parse_sort},
};

mod create;
mod delete;
mod find;
mod list;
mod update;

fn city(name: &str) -> location::ActiveModel {
    location::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        kind: ActiveValue::Set(LocationType::City),
        is_capital: ActiveValue::Set(false),
        department_id: ActiveValue::Set(None),
        ..Default::default()
    }
}
