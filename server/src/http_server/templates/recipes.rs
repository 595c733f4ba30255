use maud::{html, Markup, Render};

use recipes::{Nutrition, Recipe};

pub(crate) struct RecipeList<'a>(pub(crate) Vec<&'a Recipe>);

impl Render for RecipeList<'_> {
    fn render(&self) -> Markup {
        html! {
          ul class="recipe-list" {
            @for recipe in &self.0 {
              li {
                a href=(format!("/recipes/{}", recipe.id())) {
                    span class="subtitle" { (recipe.created().format("%-d %b %Y")) }
                    " "

                    (recipe.name())
                }

                @if let Some(rating) = recipe.rating() {
                  " "
                  span class="rating" { (format!("{rating:.1}")) " ★" }
                }
              }
            }
          }
        }
    }
}

pub(crate) struct NutritionTable<'a>(pub(crate) &'a Nutrition);

impl NutritionTable<'_> {
    fn rows(&self) -> Vec<(&'static str, f64, &'static str)> {
        let n = self.0;

        [
            ("Calories", n.calories(), "kcal"),
            ("Fat", n.fat(), "g"),
            ("Saturated fat", n.saturated_fat(), "g"),
            ("Cholesterol", n.cholesterol(), "mg"),
            ("Sodium", n.sodium(), "mg"),
            ("Carbohydrate", n.carbohydrate(), "g"),
            ("Fiber", n.fiber(), "g"),
            ("Sugar", n.sugar(), "g"),
            ("Protein", n.protein(), "g"),
        ]
        .into_iter()
        .filter_map(|(label, value, unit)| value.map(|v| (label, v, unit)))
        .collect()
    }
}

impl Render for NutritionTable<'_> {
    fn render(&self) -> Markup {
        let rows = self.rows();

        html! {
          @if !rows.is_empty() {
            table class="nutrition" {
              @for (label, value, unit) in rows {
                tr {
                  th { (label) }
                  td { (value) " " (unit) }
                }
              }
            }
          }
        }
    }
}
