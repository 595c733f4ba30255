use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};

use crate::{error::DomainError, ids::RecipeId};

/// A user's bookmark of a recipe.
///
/// Identity is (user, recipe); when the same user favourites the same
/// recipe twice, the second favourite is equal to the first no matter when
/// it was created.
#[derive(Debug, Clone)]
pub struct Favourite {
    user_id: String,
    recipe: RecipeId,
    created: DateTime<Utc>,
}

impl Favourite {
    pub fn new(user_id: &str, recipe: RecipeId) -> Result<Self, DomainError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(DomainError::EmptyField("user_id"));
        }

        Ok(Self {
            user_id: user_id.to_string(),
            recipe,
            created: Utc::now(),
        })
    }

    #[must_use]
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn recipe(&self) -> RecipeId {
        self.recipe
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn set_created(&mut self, created: DateTime<Utc>) {
        self.created = created;
    }
}

impl PartialEq for Favourite {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id && self.recipe == other.recipe
    }
}

impl Eq for Favourite {}

impl Hash for Favourite {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.user_id.hash(state);
        self.recipe.hash(state);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn rejects_empty_user_id() {
        let err = Favourite::new("", RecipeId::new(1)).unwrap_err();

        assert!(matches!(err, DomainError::EmptyField("user_id")));
    }

    #[test]
    fn identity_ignores_created_date() {
        let a = Favourite::new("alice", RecipeId::new(1))
            .unwrap()
            .with_created(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let b = Favourite::new("alice", RecipeId::new(1))
            .unwrap()
            .with_created(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());

        assert_eq!(a, b);
    }

    #[test]
    fn different_user_or_recipe_differ() {
        let a = Favourite::new("alice", RecipeId::new(1)).unwrap();
        let b = Favourite::new("bob", RecipeId::new(1)).unwrap();
        let c = Favourite::new("alice", RecipeId::new(2)).unwrap();

        assert_ne!(a, b);
        assert_ne!(a, c);
    }
}
