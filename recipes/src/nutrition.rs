use crate::error::DomainError;

/// Nutritional facts for a single recipe.
///
/// A value object: no identity, compared structurally across all nine
/// fields. `None` means the value is unknown, not zero. Fields are only
/// bounded independently; nothing checks that, say, saturated fat stays
/// below total fat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Nutrition {
    /// Total calories (kcal)
    calories: Option<f64>,
    /// Total fat (grams)
    fat: Option<f64>,
    /// Saturated fat (grams)
    saturated_fat: Option<f64>,
    /// Cholesterol (milligrams)
    cholesterol: Option<f64>,
    /// Sodium (milligrams)
    sodium: Option<f64>,
    /// Total carbohydrates (grams)
    carbohydrate: Option<f64>,
    /// Dietary fiber (grams)
    fiber: Option<f64>,
    /// Sugar (grams)
    sugar: Option<f64>,
    /// Protein (grams)
    protein: Option<f64>,
}

fn non_negative(nutrient: &'static str, value: Option<f64>) -> Result<Option<f64>, DomainError> {
    match value {
        Some(v) if v < 0.0 => Err(DomainError::NegativeNutrient {
            nutrient,
            value: v,
        }),
        _ => Ok(value),
    }
}

impl Nutrition {
    /// A nutrition record with every field unknown.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calories(&self) -> Option<f64> {
        self.calories
    }

    pub fn set_calories(&mut self, value: Option<f64>) -> Result<(), DomainError> {
        self.calories = non_negative("calories", value)?;
        Ok(())
    }

    pub fn fat(&self) -> Option<f64> {
        self.fat
    }

    pub fn set_fat(&mut self, value: Option<f64>) -> Result<(), DomainError> {
        self.fat = non_negative("fat", value)?;
        Ok(())
    }

    pub fn saturated_fat(&self) -> Option<f64> {
        self.saturated_fat
    }

    pub fn set_saturated_fat(&mut self, value: Option<f64>) -> Result<(), DomainError> {
        self.saturated_fat = non_negative("saturated fat", value)?;
        Ok(())
    }

    pub fn cholesterol(&self) -> Option<f64> {
        self.cholesterol
    }

    pub fn set_cholesterol(&mut self, value: Option<f64>) -> Result<(), DomainError> {
        self.cholesterol = non_negative("cholesterol", value)?;
        Ok(())
    }

    pub fn sodium(&self) -> Option<f64> {
        self.sodium
    }

    pub fn set_sodium(&mut self, value: Option<f64>) -> Result<(), DomainError> {
        self.sodium = non_negative("sodium", value)?;
        Ok(())
    }

    pub fn carbohydrate(&self) -> Option<f64> {
        self.carbohydrate
    }

    pub fn set_carbohydrate(&mut self, value: Option<f64>) -> Result<(), DomainError> {
        self.carbohydrate = non_negative("carbohydrate", value)?;
        Ok(())
    }

    pub fn fiber(&self) -> Option<f64> {
        self.fiber
    }

    pub fn set_fiber(&mut self, value: Option<f64>) -> Result<(), DomainError> {
        self.fiber = non_negative("fiber", value)?;
        Ok(())
    }

    pub fn sugar(&self) -> Option<f64> {
        self.sugar
    }

    pub fn set_sugar(&mut self, value: Option<f64>) -> Result<(), DomainError> {
        self.sugar = non_negative("sugar", value)?;
        Ok(())
    }

    pub fn protein(&self) -> Option<f64> {
        self.protein
    }

    pub fn set_protein(&mut self, value: Option<f64>) -> Result<(), DomainError> {
        self.protein = non_negative("protein", value)?;
        Ok(())
    }

    /// True when not a single field is known.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
