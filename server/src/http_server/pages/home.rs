use std::sync::Arc;

use axum::extract::State;
use maud::{html, Markup};
use recipes::Catalog;

use crate::http_server::templates::{base, recipes::RecipeList};

pub(crate) async fn home_page(State(catalog): State<Arc<Catalog>>) -> Markup {
    let mut recent = catalog.recipes_by_recency();
    recent.truncate(5);

    base(html! {
        h1 { "What are you cooking tonight?" }
        p class="subtitle" {
            (catalog.recipes().len()) " recipes from "
            (catalog.authors().len()) " home cooks"
        }

        div {
            h2 { a href="/recipes" { "Recently Published" } }
            (RecipeList(recent))
        }

        div {
            h2 { a href="/categories" { "Browse by Category" } }
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
        }
    })
}
