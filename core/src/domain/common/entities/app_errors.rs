use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid ingredients: {0}")]
    InvalidIngredients(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
