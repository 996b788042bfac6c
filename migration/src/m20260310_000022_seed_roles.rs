use sea_orm_migration::prelude::*;

use super::m20260302_000001_create_role_table::Role;

/// Roles every installation starts with. Newly registered users get `member`.
const ROLES: [(&str, &str); 2] = [
    ("member", "Regular club member"),
    ("admin", "Club administrator"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Role::Table)
            .columns([Role::Name, Role::Description]);

        for (name, description) in ROLES {
            insert
                .values([name.into(), description.into()])
                .map_err(|e| DbErr::Migration(e.to_string()))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let names: Vec<&str> = ROLES.iter().map(|(name, _)| *name).collect();

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Role::Table)
                    .and_where(Expr::col(Role::Name).is_in(names))
                    .to_owned(),
            )
            .await
    }
}
