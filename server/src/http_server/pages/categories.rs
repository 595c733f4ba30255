use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use maud::{html, Markup};
use recipes::{Catalog, CategoryId};
use tracing::instrument;

use crate::http_server::templates::{base, recipes::RecipeList};

#[instrument(skip_all)]
pub(crate) async fn categories_index(State(catalog): State<Arc<Catalog>>) -> Markup {
    base(html! {
      h1 { "Categories" }
      ul class="link-list" {
        @for category in catalog.categories() {
          @if let Some(id) = category.id() {
            li {
              a href=(format!("/categories/{id}")) { (category.name()) }
              " "
              span class="subtitle" { "(" (category.recipes().len()) ")" }
            }
          }
        }
      }
    })
}

#[instrument(skip(catalog))]
pub(crate) async fn category_get(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<String>,
) -> Result<Markup, StatusCode> {
    let id: u64 = id.parse().map_err(|_| StatusCode::NOT_FOUND)?;

    let category = catalog
        .category(CategoryId::new(id))
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(base(html! {
      h1 { (category.name()) }

      h2 { "Recipes" }
      (RecipeList(catalog.recipes_in_category(CategoryId::new(id))))
    }))
}
