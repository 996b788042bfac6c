use entity::sea_orm_active_enums::{PostStatus, ReactionType};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::{
        comment::{CreateCommentParams, CreateReactionParams},
        post::CreatePostParams,
    },
    service::post::{CommentService, PostService, ReactionService},
    util::slug::slugify,
};

mod comment;
mod create;
mod reaction;

fn post_params(title: &str, author_user_id: i32, tag_ids: Vec<i32>) -> CreatePostParams {
    CreatePostParams {
        title: title.to_string(),
        slug: slugify(title),
        content: "Salimos a las 6 desde la bomba de Las Palmas.".to_string(),
        status: PostStatus::Published,
        thumbnail: None,
        author_user_id,
        tag_ids,
    }
}
