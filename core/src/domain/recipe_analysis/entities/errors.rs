use thiserror::Error;

/// Why a call to the generation service did not yield text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteFailure {
    #[error("generation service is not configured")]
    NotConfigured,

    #[error("request to generation service timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("generation service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response envelope: {0}")]
    MalformedEnvelope(String),
}

/// Failures of the generation pipeline. None of these reach the caller; they
/// all route to the fallback recipe.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("generation service unavailable: {0}")]
    RemoteUnavailable(#[from] RemoteFailure),

    #[error("failed to decode generation output: {message}")]
    Decode { message: String, snippet: String },

    #[error("no usable recipes in generation output")]
    NoUsableRecipes,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecipeValidationError {
    #[error("recipe entry is not an object")]
    NotAnObject,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` has an invalid value")]
    InvalidField(&'static str),

    #[error("recipe name must be between 1 and 200 characters")]
    InvalidName,

    #[error("`{0}` must contain at least one entry")]
    EmptyList(&'static str),

    #[error("nutrition amount `{0}` is not of the form <number><unit>")]
    InvalidAmount(String),
}
