use thiserror::Error;

use crate::ids::RecipeId;

/// Everything the domain model can refuse to do.
///
/// Validation happens before any state change, so a returned error always
/// means the entity is untouched.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("id must be a positive integer")]
    NonPositiveId,

    #[error("{0} must be a non-empty string")]
    EmptyField(&'static str),

    #[error("rating must be between 0 and 5, got {0}")]
    RatingOutOfRange(f64),

    #[error("{nutrient} cannot be negative, got {value}")]
    NegativeNutrient {
        nutrient: &'static str,
        value: f64,
    },

    #[error("recipe {0} already exists for this author")]
    DuplicateRecipe(RecipeId),

    #[error("recipe already in user's favourites")]
    DuplicateFavourite,

    #[error("review references recipe {found}, expected {expected}")]
    ForeignReview {
        expected: RecipeId,
        found: RecipeId,
    },

    #[error("review not found")]
    ReviewNotFound,

    #[error("favourite not found")]
    FavouriteNotFound,

    #[error("recipe {0} not found")]
    RecipeNotFound(RecipeId),

    #[error("stored password hash is malformed")]
    PasswordHash(#[from] bcrypt::BcryptError),
}
