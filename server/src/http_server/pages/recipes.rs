use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use color_eyre::eyre::eyre;
use maud::{html, Markup};
use recipes::{Catalog, RecipeId};
use tracing::instrument;

use crate::http_server::{
    errors::ServerError,
    templates::{
        base,
        recipes::{NutritionTable, RecipeList},
    },
    ResponseResult,
};
use crate::AppConfig;

#[instrument(skip_all)]
pub(crate) async fn recipes_index(State(catalog): State<Arc<Catalog>>) -> Markup {
    base(html! {
      h1 { "Recipes" }
      (RecipeList(catalog.recipes_by_recency()))
    })
}

#[instrument(skip(catalog))]
pub(crate) async fn recipe_get(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<String>,
) -> ResponseResult<Markup> {
    let id: u64 = id
        .parse()
        .map_err(|_| ServerError(eyre!("recipe ids are numeric"), StatusCode::NOT_FOUND))?;

    let recipe = catalog.recipe(RecipeId::new(id)).ok_or_else(|| {
        ServerError(eyre!("no recipe with id {id}"), StatusCode::NOT_FOUND)
    })?;
    let author = catalog.author(recipe.author()).ok_or_else(|| {
        ServerError(
            eyre!("recipe {} references an unloaded author", recipe.id()),
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    })?;
    let category = recipe.category().and_then(|id| catalog.category(id));

    let quantities = recipe.ingredient_quantities();

    Ok(base(html! {
      h1 { (recipe.name()) }

      p class="subtitle" {
        "by " a href=(format!("/authors/{}", author.id())) { (author.name()) }
        " on " (recipe.created().format("%-d %b %Y"))

        @if let Some(category) = category {
          @if let Some(category_id) = category.id() {
            " in " a href=(format!("/categories/{category_id}")) { (category.name()) }
          }
        }
      }

      div class="recipe-meta" {
        span { "Prep: " (recipe.preparation_time()) " min" }
        span { "Cook: " (recipe.cook_time()) " min" }
        span { "Servings: " (recipe.servings()) }
        span { "Yield: " (recipe.recipe_yield()) }

        @if let Some(rating) = recipe.rating() {
          span class="rating" { (format!("{rating:.1}")) " ★" }
        }
      }

      @if !recipe.description().is_empty() {
        p { (recipe.description()) }
      }

      @for image in recipe.images() {
        img src=(image) alt=(recipe.name()) width="400";
      }

      h2 { "Ingredients" }
      ul {
        @for (i, ingredient) in recipe.ingredients().iter().enumerate() {
          li {
            @if let Some(quantity) = quantities.get(i) {
              (quantity) " "
            }
            (ingredient)
          }
        }
      }

      h2 { "Instructions" }
      ol class="instructions" {
        @for step in recipe.instructions() {
          li { (step) }
        }
      }

      @if let Some(nutrition) = recipe.nutrition() {
        h2 { "Nutrition" }
        (NutritionTable(nutrition))
      }

      h2 { "Reviews" }
      @if recipe.reviews().is_empty() {
        p class="subtitle" { "No reviews yet." }
      } @else {
        ul class="link-list" {
          @for review in recipe.reviews() {
            li {
              span class="rating" { (format!("{:.1}", review.rating())) " ★" }
              " " (review.user_id())
              span class="subtitle" { " on " (review.created().format("%-d %b %Y")) }

              @if let Some(comment) = review.comment() {
                p { (comment) }
              }
            }
          }
        }
      }
    }))
}

#[instrument(skip_all)]
pub(crate) async fn random_recipe(
    State(config): State<AppConfig>,
    State(catalog): State<Arc<Catalog>>,
) -> Response {
    let target = {
        let mut rng = rand::thread_rng();

        catalog
            .random_recipe(&mut rng)
            .map(|recipe| config.app_url(&format!("/recipes/{}", recipe.id())))
    };

    match target {
        Some(url) => Redirect::temporary(&url).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
