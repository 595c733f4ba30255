use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};

use crate::{
    date::CreatedOn,
    error::DomainError,
    ids::{AuthorId, CategoryId, RecipeId},
    nutrition::Nutrition,
    review::Review,
};

const NOT_SPECIFIED: &str = "Not specified";

/// The central entity of the catalog.
///
/// A recipe references its author and category by id and owns its reviews.
/// The rating is derived: it always equals the mean of the owned reviews'
/// ratings rounded to one decimal, recomputed on every add/remove, and is
/// `None` while there are no reviews.
#[derive(Debug, Clone)]
pub struct Recipe {
    id: RecipeId,
    name: String,
    author: AuthorId,
    cook_time: u32,
    preparation_time: u32,
    created: DateTime<Utc>,
    description: String,
    images: Vec<String>,
    category: Option<CategoryId>,
    ingredient_quantities: Vec<String>,
    ingredients: Vec<String>,
    rating: Option<f64>,
    nutrition: Option<Nutrition>,
    servings: String,
    recipe_yield: String,
    instructions: Vec<String>,
    reviews: Vec<Review>,
}

fn normalized_text(value: &str) -> String {
    let value = value.trim();

    if value.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        value.to_string()
    }
}

impl Recipe {
    /// Creates a recipe with the three required attributes; everything else
    /// starts at its default and can be filled in with the `with_*`
    /// builders.
    pub fn new(id: RecipeId, name: &str, author: AuthorId) -> Result<Self, DomainError> {
        if id.get() == 0 {
            return Err(DomainError::NonPositiveId);
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyField("name"));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            author,
            cook_time: 0,
            preparation_time: 0,
            created: Utc::now(),
            description: String::new(),
            images: Vec::new(),
            category: None,
            ingredient_quantities: Vec::new(),
            ingredients: Vec::new(),
            rating: None,
            nutrition: None,
            servings: NOT_SPECIFIED.to_string(),
            recipe_yield: NOT_SPECIFIED.to_string(),
            instructions: Vec::new(),
            reviews: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_cook_time(mut self, minutes: u32) -> Self {
        self.cook_time = minutes;
        self
    }

    #[must_use]
    pub fn with_preparation_time(mut self, minutes: u32) -> Self {
        self.preparation_time = minutes;
        self
    }

    #[must_use]
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.trim().to_string();
        self
    }

    #[must_use]
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn with_ingredient_quantities(mut self, quantities: Vec<String>) -> Self {
        self.ingredient_quantities = quantities;
        self
    }

    #[must_use]
    pub fn with_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.ingredients = ingredients;
        self
    }

    #[must_use]
    pub fn with_nutrition(mut self, nutrition: Nutrition) -> Self {
        self.nutrition = Some(nutrition);
        self
    }

    #[must_use]
    pub fn with_servings(mut self, servings: &str) -> Self {
        self.servings = normalized_text(servings);
        self
    }

    #[must_use]
    pub fn with_recipe_yield(mut self, recipe_yield: &str) -> Self {
        self.recipe_yield = normalized_text(recipe_yield);
        self
    }

    #[must_use]
    pub fn with_instructions(mut self, instructions: Vec<String>) -> Self {
        self.instructions = instructions;
        self
    }

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn cook_time(&self) -> u32 {
        self.cook_time
    }

    pub fn set_cook_time(&mut self, minutes: u32) {
        self.cook_time = minutes;
    }

    pub fn preparation_time(&self) -> u32 {
        self.preparation_time
    }

    pub fn set_preparation_time(&mut self, minutes: u32) {
        self.preparation_time = minutes;
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn set_created(&mut self, created: DateTime<Utc>) {
        self.created = created;
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.trim().to_string();
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn set_images(&mut self, images: Vec<String>) {
        self.images = images;
    }

    pub fn category(&self) -> Option<CategoryId> {
        self.category
    }

    pub fn set_category(&mut self, category: Option<CategoryId>) {
        self.category = category;
    }

    pub fn ingredient_quantities(&self) -> &[String] {
        &self.ingredient_quantities
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn rating(&self) -> Option<f64> {
        self.rating
    }

    /// Overrides the derived rating. The next review add/remove recomputes
    /// it from the reviews again.
    pub fn set_rating(&mut self, rating: Option<f64>) -> Result<(), DomainError> {
        if let Some(r) = rating {
            if !(0.0..=5.0).contains(&r) {
                return Err(DomainError::RatingOutOfRange(r));
            }
        }

        self.rating = rating;

        Ok(())
    }

    pub fn nutrition(&self) -> Option<&Nutrition> {
        self.nutrition.as_ref()
    }

    pub fn set_nutrition(&mut self, nutrition: Option<Nutrition>) {
        self.nutrition = nutrition;
    }

    pub fn servings(&self) -> &str {
        &self.servings
    }

    pub fn set_servings(&mut self, servings: &str) {
        self.servings = normalized_text(servings);
    }

    pub fn recipe_yield(&self) -> &str {
        &self.recipe_yield
    }

    pub fn set_recipe_yield(&mut self, recipe_yield: &str) {
        self.recipe_yield = normalized_text(recipe_yield);
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    pub fn set_instructions(&mut self, instructions: Vec<String>) {
        self.instructions = instructions;
    }

    /// Reviews in the order they were added. Duplicates are allowed here;
    /// uniqueness is a concern of the user's favourites, not of reviews.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Attaches a review and recomputes the rating.
    ///
    /// The review must actually reference this recipe; a review written for
    /// another recipe is rejected before anything changes.
    pub fn add_review(&mut self, review: Review) -> Result<(), DomainError> {
        if review.recipe() != self.id {
            return Err(DomainError::ForeignReview {
                expected: self.id,
                found: review.recipe(),
            });
        }

        self.reviews.push(review);
        self.update_rating();

        Ok(())
    }

    /// Removes the first review equal to `review` and recomputes the
    /// rating.
    pub fn remove_review(&mut self, review: &Review) -> Result<(), DomainError> {
        let position = self
            .reviews
            .iter()
            .position(|r| r == review)
            .ok_or(DomainError::ReviewNotFound)?;

        self.reviews.remove(position);
        self.update_rating();

        Ok(())
    }

    #[allow(clippy::cast_precision_loss)]
    fn update_rating(&mut self) {
        if self.reviews.is_empty() {
            self.rating = None;
            return;
        }

        let sum: f64 = self.reviews.iter().map(Review::rating).sum();
        let mean = sum / self.reviews.len() as f64;

        self.rating = Some((mean * 10.0).round() / 10.0);
    }
}

impl CreatedOn for Recipe {
    fn created_on(&self) -> DateTime<Utc> {
        self.created
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Recipe {}

impl Hash for Recipe {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Recipe {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Recipe {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}
