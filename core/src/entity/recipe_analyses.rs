use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recipe_analyses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub ingredients: Json,
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
    pub used_fallback: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::generated_recipes::Entity")]
    GeneratedRecipes,
}

impl Related<super::generated_recipes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GeneratedRecipes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
