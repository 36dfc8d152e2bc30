//! Application user entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub github_username: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    /// Account status, either "unconfirmed" or "confirmed".
    pub status: String,
    /// Password digest; never the plain password.
    pub password: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
