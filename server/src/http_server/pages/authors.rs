use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use maud::{html, Markup};
use recipes::{AuthorId, Catalog};
use tracing::instrument;

use crate::http_server::templates::{base, recipes::RecipeList};

#[instrument(skip_all)]
pub(crate) async fn authors_index(State(catalog): State<Arc<Catalog>>) -> Markup {
    base(html! {
      h1 { "Authors" }
      ul class="link-list" {
        @for author in catalog.authors() {
          li {
            a href=(format!("/authors/{}", author.id())) { (author.name()) }
            " "
            span class="subtitle" { "(" (author.recipes().len()) " recipes)" }
          }
        }
      }
    })
}

#[instrument(skip(catalog))]
pub(crate) async fn author_get(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<String>,
) -> Result<Markup, StatusCode> {
    let id: u64 = id.parse().map_err(|_| StatusCode::NOT_FOUND)?;

    let author = catalog
        .author(AuthorId::new(id))
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(base(html! {
      h1 { (author.name()) }

      h2 { "Recipes" }
      (RecipeList(catalog.recipes_by_author(author.id())))
    }))
}
