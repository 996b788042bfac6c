use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::motorcycle::{CreateMotorcycleParams, UpdateMotorcycleParams},
    service::motorcycle::MotorcycleService,
};

mod create;

fn motorcycle(license_plate: &str, brand_id: i32, owner_user_id: i32) -> CreateMotorcycleParams {
    CreateMotorcycleParams {
        model: "Tenere 700".to_string(),
        license_plate: license_plate.to_string(),
        photo: None,
        brand_id,
        owner_user_id,
    }
}
