use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "generated_recipes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub analysis_id: Uuid,
    pub position: i32,
    pub recipe_id: String,
    pub name: String,
    pub ingredients: Json,
    pub instructions: Json,
    pub cooking_time: String,
    pub difficulty: String,
    pub prep_time: Option<i32>,
    pub servings: i32,
    pub calories: i32,
    pub protein: String,
    pub carbs: String,
    pub fat: Option<String>,
    pub fiber: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::recipe_analyses::Entity",
        from = "Column::AnalysisId",
        to = "super::recipe_analyses::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RecipeAnalysis,
}

impl Related<super::recipe_analyses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeAnalysis.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
