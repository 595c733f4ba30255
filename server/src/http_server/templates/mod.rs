use maud::{html, Markup, DOCTYPE};

pub fn head() -> Markup {
    html! {
      head {
        title { "Home Cookbook" }
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        link rel="stylesheet" href="/styles/site.css" {}
      }
    }
}

pub fn header() -> Markup {
    html! {
      header class="site" {
        a class="brand" href="/" { "Home Cookbook" }

        nav {
          ul {
            li {
              a href="/recipes" { "Recipes" }
            }

            li {
              a href="/categories" { "Categories" }
            }

            li {
              a href="/authors" { "Authors" }
            }

            li {
              a href="/random" { "Surprise me" }
            }
          }
        }
      }
    }
}

pub fn footer() -> Markup {
    html! {
      footer class="site" {
        p { "Every recipe on this site comes from our community of home cooks." }
      }
    }
}

pub fn base(inner: Markup) -> Markup {
    html! {
      (DOCTYPE)

      html lang="en" {
        (head())

        body {
          (header())

          (inner)

          (footer())
        }
      }
    }
}

pub fn not_found() -> Markup {
    base(html! {
      h1 { "Page not found" }
      p {
        "That page doesn't exist. Maybe a "
        a href="/random" { "random recipe" }
        " instead?"
      }
    })
}

pub(crate) mod recipes;
