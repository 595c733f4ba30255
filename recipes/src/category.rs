use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::{
    ids::{CategoryId, RecipeId},
    recipe::Recipe,
};

/// A recipe category ("Dessert", "Breakfast", ...).
///
/// The id is assigned when the catalog is built; a category created outside
/// a catalog starts without one. Identity is the id alone, with an unassigned
/// id ordering before every assigned one.
#[derive(Debug, Clone)]
pub struct Category {
    id: Option<CategoryId>,
    name: String,
    recipes: Vec<RecipeId>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            recipes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: CategoryId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<CategoryId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recipe ids in insertion order. Duplicates are possible, see
    /// [`add_recipe`](Self::add_recipe).
    pub fn recipes(&self) -> &[RecipeId] {
        &self.recipes
    }

    /// Appends `recipe` unconditionally.
    ///
    /// In contrast to [`Author::add_recipe`](crate::Author::add_recipe)
    /// there is no duplicate check. Callers that need the stricter rule
    /// have to enforce it themselves.
    pub fn add_recipe(&mut self, recipe: &Recipe) {
        self.recipes.push(recipe.id());
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}
