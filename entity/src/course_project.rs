//! Course project entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course_project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project_name: String,
    /// Name of the course this project belongs to.
    pub course_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
