use entity::sea_orm_active_enums::FeedbackStatus;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::feedback::CreateFeedbackAnswerParams,
    service::feedback::{FeedbackAnswerService, FeedbackService},
};

mod answer;
