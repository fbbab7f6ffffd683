//! The recipe being composed: top-level fields plus an ordered ingredient list.

use crate::config::FormVariant;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Identifier of a top-level recipe field, named as in the form markup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    Title,
    Description,
    Servings,
    Difficulty,
    Category,
    Cuisine,
    ImageUrl,
    PrepTime,
    CookTime,
    Directions,
}

impl Field {
    /// Fields only offered by [`FormVariant::Extended`].
    pub fn is_extended_only(self) -> bool {
        matches!(self, Field::PrepTime | Field::CookTime | Field::Directions)
    }

    pub fn in_variant(self, variant: FormVariant) -> bool {
        variant.is_extended() || !self.is_extended_only()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum IngredientField {
    Name,
    Quantity,
    Unit,
}

/// One ingredient row. All values are kept as the text the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

impl Ingredient {
    pub fn get(&self, field: IngredientField) -> &str {
        match field {
            IngredientField::Name => &self.name,
            IngredientField::Quantity => &self.quantity,
            IngredientField::Unit => &self.unit,
        }
    }

    pub fn set(&mut self, field: IngredientField, value: String) {
        match field {
            IngredientField::Name => self.name = value,
            IngredientField::Quantity => self.quantity = value,
            IngredientField::Unit => self.unit = value,
        }
    }

    /// The line shown on the recipe card, e.g. `2 cups Flour`.
    pub fn summary(&self) -> String {
        format!("{} {} {}", self.quantity, self.unit, self.name)
    }
}

/// A recipe as entered in the form.
///
/// Fields that only exist in the extended variant are `None` in a minimal
/// draft; such fields are neither validated nor shown. The ingredient list
/// always holds at least one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub servings: String,
    pub difficulty: String,
    pub category: String,
    pub cuisine: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directions: Option<String>,
    #[serde(deserialize_with = "non_empty_ingredients")]
    ingredients: Vec<Ingredient>,
}

fn non_empty_ingredients<'de, D>(deserializer: D) -> Result<Vec<Ingredient>, D::Error>
where
    D: Deserializer<'de>,
{
    let ingredients = Vec::<Ingredient>::deserialize(deserializer)?;
    if ingredients.is_empty() {
        return Err(D::Error::custom("a recipe needs at least one ingredient"));
    }
    Ok(ingredients)
}

impl Default for RecipeDraft {
    fn default() -> Self {
        RecipeDraft::new(FormVariant::default())
    }
}

impl RecipeDraft {
    /// The empty draft: every field blank, one blank ingredient.
    pub fn new(variant: FormVariant) -> Self {
        let extra = variant.is_extended().then(String::new);
        RecipeDraft {
            title: String::new(),
            description: String::new(),
            servings: String::new(),
            difficulty: String::new(),
            category: String::new(),
            cuisine: String::new(),
            image_url: String::new(),
            prep_time: extra.clone(),
            cook_time: extra.clone(),
            directions: extra,
            ingredients: vec![Ingredient::default()],
        }
    }

    /// The value of `field`, or `None` when the field is not part of this draft.
    pub fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => Some(&self.title),
            Field::Description => Some(&self.description),
            Field::Servings => Some(&self.servings),
            Field::Difficulty => Some(&self.difficulty),
            Field::Category => Some(&self.category),
            Field::Cuisine => Some(&self.cuisine),
            Field::ImageUrl => Some(&self.image_url),
            Field::PrepTime => self.prep_time.as_deref(),
            Field::CookTime => self.cook_time.as_deref(),
            Field::Directions => self.directions.as_deref(),
        }
    }

    pub fn value_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Title => Some(&mut self.title),
            Field::Description => Some(&mut self.description),
            Field::Servings => Some(&mut self.servings),
            Field::Difficulty => Some(&mut self.difficulty),
            Field::Category => Some(&mut self.category),
            Field::Cuisine => Some(&mut self.cuisine),
            Field::ImageUrl => Some(&mut self.image_url),
            Field::PrepTime => self.prep_time.as_mut(),
            Field::CookTime => self.cook_time.as_mut(),
            Field::Directions => self.directions.as_mut(),
        }
    }

    /// The fields present in this draft, in form order, with their values.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::iter().filter_map(|field| self.value(field).map(|value| (field, value)))
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn ingredient_mut(&mut self, index: usize) -> Option<&mut Ingredient> {
        self.ingredients.get_mut(index)
    }

    pub fn push_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    /// Removes the ingredient at `index` unless it is the last one left.
    ///
    /// ### Returns
    /// The removed ingredient, or `None` if nothing was removed
    pub fn remove_ingredient(&mut self, index: usize) -> Option<Ingredient> {
        if self.ingredients.len() > 1 && index < self.ingredients.len() {
            Some(self.ingredients.remove(index))
        } else {
            None
        }
    }

    /// Prep time plus cook time in minutes, for extended drafts.
    /// Each side is read as a leading integer; unreadable text counts as zero.
    pub fn total_time(&self) -> Option<i64> {
        let prep = self.prep_time.as_deref()?;
        let cook = self.cook_time.as_deref()?;
        Some(leading_int(prep).saturating_add(leading_int(cook)))
    }
}

/// Reads an optional sign and the digits that follow, ignoring leading
/// whitespace and anything after the digits: `"12 min"` is 12, `"2.5"` is 2.
/// A `0x` prefix switches to hexadecimal digits.
fn leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let magnitude = i64::from_str_radix(&rest[..end], radix).unwrap_or(0);
    if negative { -magnitude } else { magnitude }
}
