//! Typed parsing of one `recipes.csv` row.
//!
//! Every optional column treats the literal `NA` and the empty string as
//! absent. List-valued columns hold a bracketed, comma-separated list of
//! quoted strings; that tiny grammar gets its own parser instead of any
//! string-eval shortcut.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    error::DomainError,
    ids::{AuthorId, RecipeId},
    nutrition::Nutrition,
};

#[derive(Debug, Error)]
pub enum RowError {
    #[error("{field} is not a valid id: {value:?}")]
    Id { field: &'static str, value: String },

    #[error("{field} is not a whole number of minutes: {value:?}")]
    Minutes { field: &'static str, value: String },

    #[error("{field} is not a number: {value:?}")]
    Number { field: &'static str, value: String },

    #[error("{field} is not a valid list: {reason}")]
    List { field: &'static str, reason: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// One raw record, named exactly as the CSV headers name it.
#[derive(Debug, Deserialize)]
pub(crate) struct RecipeRow {
    #[serde(rename = "RecipeId")]
    recipe_id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "AuthorId")]
    author_id: String,
    #[serde(rename = "AuthorName")]
    author_name: String,
    #[serde(rename = "CookTime")]
    cook_time: String,
    #[serde(rename = "PrepTime")]
    prep_time: String,
    #[serde(rename = "DatePublished")]
    date_published: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Images")]
    images: String,
    #[serde(rename = "RecipeCategory")]
    category: String,
    #[serde(rename = "RecipeIngredientQuantities")]
    ingredient_quantities: String,
    #[serde(rename = "RecipeIngredientParts")]
    ingredient_parts: String,
    #[serde(rename = "Calories")]
    calories: String,
    #[serde(rename = "FatContent")]
    fat: String,
    #[serde(rename = "SaturatedFatContent")]
    saturated_fat: String,
    #[serde(rename = "CholesterolContent")]
    cholesterol: String,
    #[serde(rename = "SodiumContent")]
    sodium: String,
    #[serde(rename = "CarbohydrateContent")]
    carbohydrate: String,
    #[serde(rename = "FiberContent")]
    fiber: String,
    #[serde(rename = "SugarContent")]
    sugar: String,
    #[serde(rename = "ProteinContent")]
    protein: String,
    #[serde(rename = "RecipeServings")]
    servings: String,
    #[serde(rename = "RecipeYield")]
    recipe_yield: String,
    #[serde(rename = "RecipeInstructions")]
    instructions: String,
}

/// The same record after every field-level coercion rule has run.
#[derive(Debug)]
pub(crate) struct ParsedRow {
    pub recipe_id: RecipeId,
    pub name: String,
    pub author_id: AuthorId,
    pub author_name: String,
    pub cook_time: u32,
    pub preparation_time: u32,
    pub published: Option<DateTime<Utc>>,
    pub description: String,
    pub images: Vec<String>,
    pub category: Option<String>,
    pub ingredient_quantities: Vec<String>,
    pub ingredients: Vec<String>,
    pub nutrition: Nutrition,
    pub servings: Option<String>,
    pub recipe_yield: Option<String>,
    pub instructions: Vec<String>,
}

impl RecipeRow {
    pub(crate) fn parse(self) -> Result<ParsedRow, RowError> {
        let mut nutrition = Nutrition::new();
        nutrition.set_calories(parse_nutrient("Calories", &self.calories)?)?;
        nutrition.set_fat(parse_nutrient("FatContent", &self.fat)?)?;
        nutrition.set_saturated_fat(parse_nutrient("SaturatedFatContent", &self.saturated_fat)?)?;
        nutrition.set_cholesterol(parse_nutrient("CholesterolContent", &self.cholesterol)?)?;
        nutrition.set_sodium(parse_nutrient("SodiumContent", &self.sodium)?)?;
        nutrition.set_carbohydrate(parse_nutrient("CarbohydrateContent", &self.carbohydrate)?)?;
        nutrition.set_fiber(parse_nutrient("FiberContent", &self.fiber)?)?;
        nutrition.set_sugar(parse_nutrient("SugarContent", &self.sugar)?)?;
        nutrition.set_protein(parse_nutrient("ProteinContent", &self.protein)?)?;

        Ok(ParsedRow {
            recipe_id: RecipeId::new(parse_id("RecipeId", &self.recipe_id)?),
            name: self.name,
            author_id: AuthorId::new(parse_id("AuthorId", &self.author_id)?),
            author_name: self.author_name,
            cook_time: parse_minutes("CookTime", &self.cook_time)?,
            preparation_time: parse_minutes("PrepTime", &self.prep_time)?,
            published: parse_date(&self.date_published),
            description: self.description,
            images: parse_list("Images", &self.images)?,
            category: present(&self.category).map(str::to_string),
            ingredient_quantities: parse_list(
                "RecipeIngredientQuantities",
                &self.ingredient_quantities,
            )?,
            ingredients: parse_list("RecipeIngredientParts", &self.ingredient_parts)?,
            nutrition,
            servings: present(&self.servings).map(str::to_string),
            recipe_yield: present(&self.recipe_yield).map(str::to_string),
            instructions: parse_list("RecipeInstructions", &self.instructions)?,
        })
    }
}

/// `NA` and the empty string both mean "absent".
fn present(value: &str) -> Option<&str> {
    let value = value.trim();

    if value.is_empty() || value == "NA" {
        None
    } else {
        Some(value)
    }
}

fn parse_id(field: &'static str, value: &str) -> Result<u64, RowError> {
    value.trim().parse().map_err(|_| RowError::Id {
        field,
        value: value.to_string(),
    })
}

fn parse_minutes(field: &'static str, value: &str) -> Result<u32, RowError> {
    let Some(value) = present(value) else {
        return Ok(0);
    };

    value.parse().map_err(|_| RowError::Minutes {
        field,
        value: value.to_string(),
    })
}

fn parse_nutrient(field: &'static str, value: &str) -> Result<Option<f64>, RowError> {
    let Some(value) = present(value) else {
        return Ok(None);
    };

    let parsed = value.parse().map_err(|_| RowError::Number {
        field,
        value: value.to_string(),
    })?;

    Ok(Some(parsed))
}

/// Accepts `"21st Aug 2005"`-style dates (ordinal suffix optional) and ISO
/// `2005-08-21`; anything else is treated as unknown.
pub(crate) fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = present(value)?;

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return midnight(date);
    }

    let tokens: Vec<&str> = value.split_whitespace().collect();
    if let [day, month, year] = tokens[..] {
        let cleaned = format!("{} {month} {year}", strip_ordinal(day));
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, "%d %b %Y") {
            return midnight(date);
        }
    }

    None
}

fn midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

fn strip_ordinal(day: &str) -> &str {
    let stripped = day
        .strip_suffix("st")
        .or_else(|| day.strip_suffix("nd"))
        .or_else(|| day.strip_suffix("rd"))
        .or_else(|| day.strip_suffix("th"));

    match stripped {
        Some(digits) if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) => digits,
        _ => day,
    }
}

/// Parses a bracketed, comma-separated list of quoted strings.
///
/// `[...]` and `(...)` both work as brackets, elements may be single- or
/// double-quoted with backslash escapes, and a bare quoted string is a
/// one-element list.
pub(crate) fn parse_list(field: &'static str, raw: &str) -> Result<Vec<String>, RowError> {
    let Some(s) = present(raw) else {
        return Ok(Vec::new());
    };

    let list_err = |reason: String| RowError::List { field, reason };

    let chars: Vec<char> = s.chars().collect();

    let closer = match chars[0] {
        '"' | '\'' => {
            let (item, next) = quoted(&chars, 0).map_err(list_err)?;
            if chars[next..].iter().any(|c| !c.is_whitespace()) {
                return Err(list_err("trailing characters after string".to_string()));
            }
            return Ok(vec![item]);
        }
        '[' => ']',
        '(' => ')',
        other => {
            return Err(list_err(format!(
                "expected a quote or opening bracket, found {other:?}"
            )))
        }
    };

    let mut items = Vec::new();
    let mut i = skip_whitespace(&chars, 1);

    loop {
        match chars.get(i) {
            None => return Err(list_err("unterminated list".to_string())),
            Some(c) if *c == closer => {
                if chars[i + 1..].iter().any(|c| !c.is_whitespace()) {
                    return Err(list_err("trailing characters after list".to_string()));
                }
                return Ok(items);
            }
            Some(_) => {
                let (item, next) = quoted(&chars, i).map_err(list_err)?;
                items.push(item);

                i = skip_whitespace(&chars, next);
                match chars.get(i) {
                    Some(',') => i = skip_whitespace(&chars, i + 1),
                    Some(c) if *c == closer => {}
                    _ => return Err(list_err(format!("expected ',' or '{closer}'"))),
                }
            }
        }
    }
}

fn quoted(chars: &[char], start: usize) -> Result<(String, usize), String> {
    let quote = chars[start];
    if quote != '"' && quote != '\'' {
        return Err(format!("expected a quoted string, found {quote:?}"));
    }

    let mut out = String::new();
    let mut i = start + 1;

    while i < chars.len() {
        match chars[i] {
            '\\' => match chars.get(i + 1) {
                Some(escaped) => {
                    out.push(*escaped);
                    i += 2;
                }
                None => return Err("dangling escape at end of input".to_string()),
            },
            c if c == quote => return Ok((out, i + 1)),
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    Err("unterminated quoted string".to_string())
}

fn skip_whitespace(chars: &[char], mut i: usize) -> usize {
    while chars.get(i).is_some_and(|c| c.is_whitespace()) {
        i += 1;
    }

    i
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn na_and_empty_mean_absent() {
        assert_eq!(present("NA"), None);
        assert_eq!(present(""), None);
        assert_eq!(present("  "), None);
        assert_eq!(present(" 4 "), Some("4"));
    }

    #[test]
    fn minutes_default_to_zero() {
        assert_eq!(parse_minutes("CookTime", "NA").unwrap(), 0);
        assert_eq!(parse_minutes("CookTime", "").unwrap(), 0);
        assert_eq!(parse_minutes("CookTime", "25").unwrap(), 25);

        assert!(parse_minutes("CookTime", "-5").is_err());
        assert!(parse_minutes("CookTime", "soon").is_err());
    }

    #[test]
    fn parses_both_date_formats() {
        let expected = Utc.with_ymd_and_hms(2005, 8, 21, 0, 0, 0).unwrap();

        assert_eq!(parse_date("21 Aug 2005"), Some(expected));
        assert_eq!(parse_date("21st Aug 2005"), Some(expected));
        assert_eq!(parse_date("2005-08-21"), Some(expected));

        let first = Utc.with_ymd_and_hms(1999, 9, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_date("1st Sep 1999"), Some(first));
    }

    #[test]
    fn unparseable_dates_are_unknown() {
        assert_eq!(parse_date("NA"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("sometime in March"), None);
        assert_eq!(parse_date("32 Jan 2001"), None);
    }

    #[test]
    fn parses_bracketed_lists() {
        assert_eq!(
            parse_list("Images", r#"["a.jpg", "b.jpg"]"#).unwrap(),
            vec!["a.jpg", "b.jpg"]
        );
        assert_eq!(
            parse_list("Images", r"('one', 'two', 'three')").unwrap(),
            vec!["one", "two", "three"]
        );
        assert_eq!(parse_list("Images", "[]").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn bare_quoted_string_is_one_element() {
        assert_eq!(
            parse_list("RecipeInstructions", r#""Mix everything.""#).unwrap(),
            vec!["Mix everything."]
        );
    }

    #[test]
    fn handles_escapes() {
        assert_eq!(
            parse_list("RecipeInstructions", r#"["Say \"when\".", 'it\'s done']"#).unwrap(),
            vec![r#"Say "when"."#, "it's done"]
        );
    }

    #[test]
    fn na_list_is_empty() {
        assert_eq!(parse_list("Images", "NA").unwrap(), Vec::<String>::new());
        assert_eq!(parse_list("Images", "").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn malformed_lists_name_the_field() {
        let err = parse_list("Images", "[unquoted]").unwrap_err();
        assert!(matches!(err, RowError::List { field: "Images", .. }));

        assert!(parse_list("Images", r#"["open"#).is_err());
        assert!(parse_list("Images", r#"["a" "b"]"#).is_err());
        assert!(parse_list("Images", "just text").is_err());
    }

    fn row() -> RecipeRow {
        RecipeRow {
            recipe_id: "38".to_string(),
            name: "Low-Fat Berry Blue Frozen Dessert".to_string(),
            author_id: "1533".to_string(),
            author_name: "Dancer".to_string(),
            cook_time: "1445".to_string(),
            prep_time: "45".to_string(),
            date_published: "1999-08-09".to_string(),
            description: "Make and share this dessert.".to_string(),
            images: r#"["berries.jpg"]"#.to_string(),
            category: "Frozen Desserts".to_string(),
            ingredient_quantities: r#"["4", "1/4", "1"]"#.to_string(),
            ingredient_parts: r#"["blueberries", "sugar", "vanilla yogurt"]"#.to_string(),
            calories: "170.9".to_string(),
            fat: "2.5".to_string(),
            saturated_fat: "1.3".to_string(),
            cholesterol: "8".to_string(),
            sodium: "29.8".to_string(),
            carbohydrate: "37.1".to_string(),
            fiber: "3.6".to_string(),
            sugar: "30.2".to_string(),
            protein: "3.2".to_string(),
            servings: "4".to_string(),
            recipe_yield: "NA".to_string(),
            instructions: r#"["Toss berries with sugar.", "Freeze."]"#.to_string(),
        }
    }

    #[test]
    fn parses_a_full_row() {
        let parsed = row().parse().unwrap();

        assert_eq!(parsed.recipe_id, RecipeId::new(38));
        assert_eq!(parsed.author_id, AuthorId::new(1533));
        assert_eq!(parsed.cook_time, 1445);
        assert_eq!(parsed.preparation_time, 45);
        assert_eq!(
            parsed.published,
            Some(Utc.with_ymd_and_hms(1999, 8, 9, 0, 0, 0).unwrap())
        );
        assert_eq!(parsed.ingredients.len(), 3);
        assert_eq!(parsed.category.as_deref(), Some("Frozen Desserts"));
        assert_eq!(parsed.nutrition.calories(), Some(170.9));
        assert_eq!(parsed.servings.as_deref(), Some("4"));
        assert_eq!(parsed.recipe_yield, None);
    }

    #[test]
    fn negative_nutrient_fails_the_row() {
        let mut bad = row();
        bad.calories = "-170.9".to_string();

        let err = bad.parse().unwrap_err();
        assert!(matches!(err, RowError::Domain(_)));
    }
}
