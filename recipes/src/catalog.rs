use std::collections::HashMap;

use color_eyre::eyre::{eyre, Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::instrument;

use crate::{
    author::Author,
    category::Category,
    csv_reader::{ParsedRow, RecipeRow},
    date::ByRecency,
    ids::{AuthorId, CategoryId, RecipeId},
    recipe::Recipe,
};

static RECIPES_CSV: &str = include_str!("../../data/recipes.csv");

/// The in-memory object graph the site serves.
///
/// Built once from the CSV file and read-only afterwards: authors are
/// deduplicated by id, categories by name (ids handed out from a counter
/// starting at 1), and every recipe is wired into its author and category.
/// Entities keep CSV encounter order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    authors: Vec<Author>,
    categories: Vec<Category>,
    recipes: Vec<Recipe>,
    author_index: HashMap<AuthorId, usize>,
    category_index: HashMap<CategoryId, usize>,
    recipe_index: HashMap<RecipeId, usize>,
}

impl Catalog {
    /// Loads the recipe data compiled into the binary.
    pub fn from_embedded() -> Result<Self> {
        Self::from_csv(RECIPES_CSV).wrap_err("The embedded recipe data failed to load")
    }

    /// Builds the catalog from headered CSV text. The first malformed row
    /// aborts the load.
    #[instrument(skip_all)]
    pub fn from_csv(contents: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().from_reader(contents.as_bytes());

        let mut catalog = Self::default();
        let mut categories_by_name: HashMap<String, CategoryId> = HashMap::new();

        for (index, record) in reader.deserialize::<RecipeRow>().enumerate() {
            // line 1 is the header
            let line = index + 2;

            let row: RecipeRow =
                record.wrap_err_with(|| format!("row at line {line} is not a valid record"))?;
            let parsed = row
                .parse()
                .wrap_err_with(|| format!("row at line {line} failed to parse"))?;

            catalog
                .insert(parsed, &mut categories_by_name)
                .wrap_err_with(|| format!("row at line {line} could not be added"))?;
        }

        tracing::info!(
            recipes = catalog.recipes.len(),
            authors = catalog.authors.len(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    fn insert(
        &mut self,
        row: ParsedRow,
        categories_by_name: &mut HashMap<String, CategoryId>,
    ) -> Result<()> {
        if self.recipe_index.contains_key(&row.recipe_id) {
            return Err(eyre!("recipe id {} appears twice", row.recipe_id));
        }

        let mut recipe = Recipe::new(row.recipe_id, &row.name, row.author_id)?
            .with_cook_time(row.cook_time)
            .with_preparation_time(row.preparation_time)
            .with_description(&row.description)
            .with_images(row.images)
            .with_ingredient_quantities(row.ingredient_quantities)
            .with_ingredients(row.ingredients)
            .with_instructions(row.instructions)
            .with_nutrition(row.nutrition);

        if let Some(published) = row.published {
            recipe = recipe.with_created(published);
        }
        if let Some(servings) = &row.servings {
            recipe = recipe.with_servings(servings);
        }
        if let Some(recipe_yield) = &row.recipe_yield {
            recipe = recipe.with_recipe_yield(recipe_yield);
        }

        if let Some(category_name) = row.category {
            let category_id = match categories_by_name.get(&category_name) {
                Some(id) => *id,
                None => {
                    let id = CategoryId::new(categories_by_name.len() as u64 + 1);
                    categories_by_name.insert(category_name.clone(), id);
                    self.category_index.insert(id, self.categories.len());
                    self.categories.push(Category::new(category_name).with_id(id));
                    id
                }
            };
            recipe = recipe.with_category(category_id);
        }

        let author_position = match self.author_index.get(&row.author_id) {
            Some(position) => *position,
            None => {
                let position = self.authors.len();
                self.author_index.insert(row.author_id, position);
                self.authors.push(Author::new(row.author_id, row.author_name));
                position
            }
        };
        self.authors[author_position].add_recipe(&recipe)?;

        if let Some(category_id) = recipe.category() {
            let position = self.category_index[&category_id];
            self.categories[position].add_recipe(&recipe);
        }

        self.recipe_index.insert(recipe.id(), self.recipes.len());
        self.recipes.push(recipe);

        Ok(())
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn recipe(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipe_index.get(&id).map(|&i| &self.recipes[i])
    }

    /// Mutable lookup, for attaching reviews before the catalog is shared.
    pub fn recipe_mut(&mut self, id: RecipeId) -> Option<&mut Recipe> {
        self.recipe_index.get(&id).map(|&i| &mut self.recipes[i])
    }

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.author_index.get(&id).map(|&i| &self.authors[i])
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.category_index.get(&id).map(|&i| &self.categories[i])
    }

    pub fn recipes_by_recency(&self) -> Vec<&Recipe> {
        self.recipes.by_recency()
    }

    pub fn recipes_by_author(&self, id: AuthorId) -> Vec<&Recipe> {
        self.author(id)
            .map(|author| {
                author
                    .recipes()
                    .iter()
                    .filter_map(|&recipe_id| self.recipe(recipe_id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn recipes_in_category(&self, id: CategoryId) -> Vec<&Recipe> {
        self.category(id)
            .map(|category| {
                category
                    .recipes()
                    .iter()
                    .filter_map(|&recipe_id| self.recipe(recipe_id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn random_recipe<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Recipe> {
        self.recipes.choose(rng)
    }

    /// Re-checks the invariants of every loaded entity, printing progress
    /// the whole way. Used by the `validate` command.
    pub fn validate(&self) -> Result<()> {
        println!("Validating {} recipes", self.recipes.len());

        for recipe in &self.recipes {
            if let Some(rating) = recipe.rating() {
                if !(0.0..=5.0).contains(&rating) {
                    return Err(eyre!(
                        "recipe {} has rating {rating} outside [0, 5]",
                        recipe.id()
                    ));
                }
            }

            self.author(recipe.author()).ok_or_else(|| {
                eyre!(
                    "recipe {} references unknown author {}",
                    recipe.id(),
                    recipe.author()
                )
            })?;

            if let Some(category_id) = recipe.category() {
                self.category(category_id).ok_or_else(|| {
                    eyre!(
                        "recipe {} references unknown category {category_id}",
                        recipe.id()
                    )
                })?;
            }
        }

        println!("Validating {} authors", self.authors.len());
        for author in &self.authors {
            for &recipe_id in author.recipes() {
                self.recipe(recipe_id).ok_or_else(|| {
                    eyre!("author {} owns unknown recipe {recipe_id}", author.id())
                })?;
            }
        }

        println!("Catalog Valid! ✅");

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SAMPLE: &str = "\
RecipeId,Name,AuthorId,AuthorName,CookTime,PrepTime,DatePublished,Description,Images,RecipeCategory,RecipeIngredientQuantities,RecipeIngredientParts,Calories,FatContent,SaturatedFatContent,CholesterolContent,SodiumContent,CarbohydrateContent,FiberContent,SugarContent,ProteinContent,RecipeServings,RecipeYield,RecipeInstructions
38,Low-Fat Berry Blue Frozen Dessert,1533,Dancer,1445,45,1999-08-09,A summer dessert.,\"['berries.jpg']\",Frozen Desserts,\"['4', '1/4']\",\"['blueberries', 'sugar']\",170.9,2.5,1.3,8,29.8,37.1,3.6,30.2,3.2,4,NA,\"['Toss berries with sugar.', 'Freeze.']\"
39,Biryani,1567,elly9812,25,240,21st Aug 1999,Fragrant rice dish.,NA,Chicken Breast,\"['2', '1']\",\"['rice', 'chicken']\",1110.7,58.8,16.6,372.8,368.4,84.4,9,20.4,63.4,6,NA,\"['Soak saffron in warm milk.', 'Layer and steam.']\"
40,Best Lemonade,1566,Stephen Little,5,30,NA,Tart and refreshing.,NA,Beverages,\"['2', '2']\",\"['sugar', 'lemons']\",311.1,0.3,0.1,0,1.8,81.5,0.4,77.2,0.3,4,4 quarts,\"['Boil sugar and water.', 'Add lemon juice.', 'Chill.']\"
41,Carina's Tofu-Vegetable Kebabs,1586,Cyclopz,20,24,1999-09-03,Skewers for the grill.,NA,Beverages,\"['1']\",\"['tofu']\",536.1,23.2,3.8,0,1558.6,64.2,17.3,32.1,29.3,2,4 kebabs,\"['Marinate tofu.', 'Grill.']\"
42,Another from Dancer,1533,Dancer,10,10,2001-02-15,A second recipe.,NA,Frozen Desserts,\"['1']\",\"['ice']\",10,0,0,0,0,2,0,1,0,NA,NA,\"['Freeze water.']\"
";

    #[test]
    fn builds_the_graph_from_csv() {
        let catalog = Catalog::from_csv(SAMPLE).unwrap();

        assert_eq!(catalog.recipes().len(), 5);
        // 1533 appears twice but is one author
        assert_eq!(catalog.authors().len(), 4);
        // Frozen Desserts and Beverages repeat
        assert_eq!(catalog.categories().len(), 3);
    }

    #[test]
    fn category_ids_count_up_from_one() {
        let catalog = Catalog::from_csv(SAMPLE).unwrap();

        let names: Vec<_> = catalog
            .categories()
            .iter()
            .map(|c| (c.id().unwrap().get(), c.name().to_string()))
            .collect();

        assert_eq!(
            names,
            vec![
                (1, "Frozen Desserts".to_string()),
                (2, "Chicken Breast".to_string()),
                (3, "Beverages".to_string()),
            ]
        );
    }

    #[test]
    fn wires_recipes_into_authors() {
        let catalog = Catalog::from_csv(SAMPLE).unwrap();

        let dancer = catalog.author(AuthorId::new(1533)).unwrap();
        assert_eq!(dancer.name(), "Dancer");
        assert_eq!(
            dancer.recipes(),
            &[RecipeId::new(38), RecipeId::new(42)]
        );

        let by_author = catalog.recipes_by_author(AuthorId::new(1533));
        assert_eq!(by_author.len(), 2);
        assert_eq!(by_author[0].name(), "Low-Fat Berry Blue Frozen Dessert");
    }

    #[test]
    fn wires_recipes_into_categories() {
        let catalog = Catalog::from_csv(SAMPLE).unwrap();

        let beverages = catalog
            .categories()
            .iter()
            .find(|c| c.name() == "Beverages")
            .unwrap();
        let in_category = catalog.recipes_in_category(beverages.id().unwrap());

        assert_eq!(in_category.len(), 2);
    }

    #[test]
    fn coerces_na_fields() {
        let catalog = Catalog::from_csv(SAMPLE).unwrap();

        let biryani = catalog.recipe(RecipeId::new(39)).unwrap();
        assert!(biryani.images().is_empty());
        assert_eq!(biryani.servings(), "6");
        assert_eq!(biryani.recipe_yield(), "Not specified");

        let lemonade = catalog.recipe(RecipeId::new(40)).unwrap();
        assert_eq!(lemonade.recipe_yield(), "4 quarts");
    }

    #[test]
    fn parses_dates_in_both_formats() {
        let catalog = Catalog::from_csv(SAMPLE).unwrap();

        let dessert = catalog.recipe(RecipeId::new(38)).unwrap();
        assert_eq!(dessert.created().date_naive().to_string(), "1999-08-09");

        let biryani = catalog.recipe(RecipeId::new(39)).unwrap();
        assert_eq!(biryani.created().date_naive().to_string(), "1999-08-21");
    }

    #[test]
    fn recency_orders_most_recent_first() {
        let catalog = Catalog::from_csv(SAMPLE).unwrap();

        let recent = catalog.recipes_by_recency();

        // recipe 40 has no publish date, so its created date is the load
        // time and it sorts before everything published last century
        assert_eq!(recent[0].id(), RecipeId::new(40));
        assert_eq!(recent[1].id(), RecipeId::new(42));
        assert_eq!(recent.last().unwrap().id(), RecipeId::new(38));
    }

    #[test]
    fn lookups_miss_cleanly() {
        let catalog = Catalog::from_csv(SAMPLE).unwrap();

        assert!(catalog.recipe(RecipeId::new(999)).is_none());
        assert!(catalog.author(AuthorId::new(999)).is_none());
        assert!(catalog.recipes_by_author(AuthorId::new(999)).is_empty());
    }

    #[test]
    fn malformed_row_aborts_with_line_number() {
        let bad = SAMPLE.replace("1445", "soon");

        let err = Catalog::from_csv(&bad).unwrap_err();

        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn duplicate_recipe_id_aborts() {
        let dup = SAMPLE.replace("42,Another from Dancer", "38,Another from Dancer");

        assert!(Catalog::from_csv(&dup).is_err());
    }

    #[test]
    fn random_recipe_comes_from_the_catalog() {
        let catalog = Catalog::from_csv(SAMPLE).unwrap();
        let mut rng = rand::thread_rng();

        let recipe = catalog.random_recipe(&mut rng).unwrap();
        assert!(catalog.recipe(recipe.id()).is_some());

        assert!(Catalog::default().random_recipe(&mut rng).is_none());
    }

    #[test]
    fn reviews_attached_after_load_update_the_rating() {
        let mut catalog = Catalog::from_csv(SAMPLE).unwrap();

        let dessert = catalog.recipe_mut(RecipeId::new(38)).unwrap();
        dessert
            .add_review(crate::Review::new("cook_7", RecipeId::new(38), 4.0).unwrap())
            .unwrap();
        dessert
            .add_review(crate::Review::new("cook_12", RecipeId::new(38), 5.0).unwrap())
            .unwrap();

        let dessert = catalog.recipe(RecipeId::new(38)).unwrap();
        assert_eq!(dessert.rating(), Some(4.5));

        assert!(catalog.recipe_mut(RecipeId::new(999)).is_none());
    }

    #[test]
    fn embedded_data_loads_and_validates() {
        let catalog = Catalog::from_embedded().unwrap();

        assert!(!catalog.recipes().is_empty());
        catalog.validate().unwrap();
    }
}
