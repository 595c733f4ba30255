use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::{
    error::DomainError,
    ids::{AuthorId, RecipeId},
    recipe::Recipe,
};

/// A recipe author.
///
/// Owns the ordered list of recipes it published; the same recipe can only
/// appear once. Identity is the author id alone, so renaming an author does
/// not change equality or ordering.
#[derive(Debug, Clone)]
pub struct Author {
    id: AuthorId,
    name: String,
    recipes: Vec<RecipeId>,
}

impl Author {
    pub fn new(id: AuthorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            recipes: Vec::new(),
        }
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recipe ids in insertion order.
    pub fn recipes(&self) -> &[RecipeId] {
        &self.recipes
    }

    /// Records that this author published `recipe`.
    ///
    /// Unlike [`Category::add_recipe`](crate::Category::add_recipe) this
    /// rejects a recipe that is already present.
    pub fn add_recipe(&mut self, recipe: &Recipe) -> Result<(), DomainError> {
        if self.recipes.contains(&recipe.id()) {
            return Err(DomainError::DuplicateRecipe(recipe.id()));
        }

        self.recipes.push(recipe.id());

        Ok(())
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Author {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Author {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}
