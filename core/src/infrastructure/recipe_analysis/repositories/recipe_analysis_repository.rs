use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe_analysis::{
            entities::{Recipe, RecipeAnalysis, RecipeHistoryEntry},
            ports::RecipeAnalysisRepository,
        },
    },
    entity::{
        generated_recipes::{Column as RecipeColumn, Entity as RecipeEntity},
        recipe_analyses::{Column as AnalysisColumn, Entity as AnalysisEntity},
    },
    infrastructure::recipe_analysis::mappers::{analysis_active_model, recipe_active_model},
};

#[derive(Debug, Clone)]
pub struct SeaOrmRecipeAnalysisRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmRecipeAnalysisRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn database_error(context: &str, e: impl std::fmt::Display) -> CoreError {
    error!("{}: {}", context, e);
    CoreError::DatabaseError(format!("{context}: {e}"))
}

impl RecipeAnalysisRepository for SeaOrmRecipeAnalysisRepository {
    async fn save_analysis(
        &self,
        analysis: RecipeAnalysis,
        recipes: Vec<Recipe>,
    ) -> Result<RecipeAnalysis, CoreError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| database_error("Failed to open transaction", e))?;

        AnalysisEntity::insert(analysis_active_model(&analysis))
            .exec(&txn)
            .await
            .map_err(|e| database_error("Failed to create recipe analysis", e))?;

        if !recipes.is_empty() {
            let created_at = analysis.created_at.fixed_offset();
            let models = recipes
                .iter()
                .enumerate()
                .map(|(position, recipe)| {
                    recipe_active_model(analysis.id, position, recipe, created_at)
                });

            RecipeEntity::insert_many(models)
                .exec(&txn)
                .await
                .map_err(|e| database_error("Failed to create generated recipes", e))?;
        }

        txn.commit()
            .await
            .map_err(|e| database_error("Failed to commit recipe analysis", e))?;

        Ok(analysis)
    }

    async fn recent_analyses(&self, limit: u64) -> Result<Vec<RecipeHistoryEntry>, CoreError> {
        let analyses = AnalysisEntity::find()
            .order_by_desc(AnalysisColumn::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| database_error("Failed to fetch recipe analyses", e))?;

        if analyses.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = analyses.iter().map(|analysis| analysis.id).collect();
        let recipe_models = RecipeEntity::find()
            .filter(RecipeColumn::AnalysisId.is_in(ids))
            .order_by_asc(RecipeColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| database_error("Failed to fetch generated recipes", e))?;

        let mut recipes_by_analysis: HashMap<Uuid, Vec<Recipe>> = HashMap::new();
        for model in &recipe_models {
            recipes_by_analysis
                .entry(model.analysis_id)
                .or_default()
                .push(Recipe::from(model));
        }

        let history = analyses
            .iter()
            .map(|model| {
                let recipes = recipes_by_analysis.remove(&model.id).unwrap_or_default();
                RecipeHistoryEntry::new(RecipeAnalysis::from(model), recipes)
            })
            .collect();

        Ok(history)
    }
}
