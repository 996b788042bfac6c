pub use sea_orm_migration::prelude::*;

mod common;
mod m20260302_000001_create_role_table;
mod m20260302_000002_create_user_table;
mod m20260302_000003_create_location_table;
mod m20260302_000004_create_team_table;
mod m20260302_000005_create_profile_table;
mod m20260303_000006_create_brand_table;
mod m20260303_000007_create_motorcycle_table;
mod m20260304_000008_create_company_table;
mod m20260304_000009_create_agreement_table;
mod m20260304_000010_create_agreement_team_table;
mod m20260305_000011_create_path_table;
mod m20260305_000012_create_event_table;
mod m20260305_000013_create_participation_table;
mod m20260305_000014_create_review_table;
mod m20260306_000015_create_tag_table;
mod m20260306_000016_create_post_table;
mod m20260306_000017_create_post_tag_table;
mod m20260306_000018_create_comment_table;
mod m20260306_000019_create_comment_reaction_table;
mod m20260307_000020_create_feedback_table;
mod m20260307_000021_create_feedback_answer_table;
mod m20260310_000022_seed_roles;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260302_000001_create_role_table::Migration),
            Box::new(m20260302_000002_create_user_table::Migration),
            Box::new(m20260302_000003_create_location_table::Migration),
            Box::new(m20260302_000004_create_team_table::Migration),
            Box::new(m20260302_000005_create_profile_table::Migration),
            Box::new(m20260303_000006_create_brand_table::Migration),
            Box::new(m20260303_000007_create_motorcycle_table::Migration),
            Box::new(m20260304_000008_create_company_table::Migration),
            Box::new(m20260304_000009_create_agreement_table::Migration),
            Box::new(m20260304_000010_create_agreement_team_table::Migration),
            Box::new(m20260305_000011_create_path_table::Migration),
            Box::new(m20260305_000012_create_event_table::Migration),
            Box::new(m20260305_000013_create_participation_table::Migration),
            Box::new(m20260305_000014_create_review_table::Migration),
            Box::new(m20260306_000015_create_tag_table::Migration),
            Box::new(m20260306_000016_create_post_table::Migration),
            Box::new(m20260306_000017_create_post_tag_table::Migration),
            Box::new(m20260306_000018_create_comment_table::Migration),
            Box::new(m20260306_000019_create_comment_reaction_table::Migration),
            Box::new(m20260307_000020_create_feedback_table::Migration),
            Box::new(m20260307_000021_create_feedback_answer_table::Migration),
            Box::new(m20260310_000022_seed_roles::Migration),
        ]
    }
}
