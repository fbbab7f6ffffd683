use crate::config::FormVariant;
use crate::recipe::{Field, IngredientField};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// A failed validation rule. The display text is what the form shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Title must be 3-50 characters")]
    TitleLength,
    #[error("Description is required")]
    DescriptionRequired,
    #[error("Description must be 10-500 characters")]
    DescriptionLength,
    #[error("Servings is required")]
    ServingsRequired,
    #[error("Servings must be 1-20")]
    ServingsRange,
    #[error("Prep time is required")]
    PrepTimeRequired,
    #[error("Prep time must be 1-600 minutes")]
    PrepTimeRange,
    #[error("Cook time is required")]
    CookTimeRequired,
    #[error("Cook time must be 1-600 minutes")]
    CookTimeRange,
    #[error("Directions are required")]
    DirectionsRequired,
    #[error("Directions must be at least 10 characters")]
    DirectionsLength,
    #[error("Difficulty is required")]
    DifficultyRequired,
    #[error("Category is required")]
    CategoryRequired,
    #[error("Cuisine type is required")]
    CuisineRequired,
    #[error("Image URL is required")]
    ImageUrlRequired,
    #[error("Please enter a valid URL")]
    ImageUrlInvalid,
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be 2-50 characters")]
    NameLength,
    #[error("Quantity is required")]
    QuantityRequired,
    #[error("Quantity must be 0.1-1000")]
    QuantityRange,
    #[error("Unit is required")]
    UnitRequired,
}

/// Where an error is shown: next to a top-level field, or next to one
/// input of an ingredient row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKey {
    Field(Field),
    Ingredient { index: usize, field: IngredientField },
}

impl ErrorKey {
    pub fn ingredient(index: usize, field: IngredientField) -> Self {
        ErrorKey::Ingredient { index, field }
    }
}

impl From<Field> for ErrorKey {
    fn from(field: Field) -> Self {
        ErrorKey::Field(field)
    }
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKey::Field(field) => write!(f, "{field}"),
            ErrorKey::Ingredient { index, field } => write!(f, "ingredient_{index}_{field}"),
        }
    }
}

/// Current validation errors, keyed by where they are displayed.
/// A key that is absent has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<ErrorKey, FieldError>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &ErrorKey) -> Option<FieldError> {
        self.0.get(key).copied()
    }

    /// The message for `key`, if it has an error.
    pub fn message(&self, key: &ErrorKey) -> Option<String> {
        self.get(key).map(|err| err.to_string())
    }

    /// Lookup by the rendered key, e.g. `"title"` or `"ingredient_0_unit"`.
    pub fn message_for(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(k, _)| k.to_string() == key)
            .map(|(_, err)| err.to_string())
    }

    /// Records the outcome of validating one key: an error is stored,
    /// a pass clears whatever was there.
    pub fn patch(&mut self, key: ErrorKey, outcome: Result<(), FieldError>) {
        match outcome {
            Ok(()) => {
                self.0.remove(&key);
            }
            Err(error) => {
                self.0.insert(key, error);
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ErrorKey, &FieldError)> {
        self.0.iter()
    }
}

impl FromIterator<(ErrorKey, FieldError)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (ErrorKey, FieldError)>>(iter: I) -> Self {
        ErrorMap(iter.into_iter().collect())
    }
}

impl Extend<(ErrorKey, FieldError)> for ErrorMap {
    fn extend<I: IntoIterator<Item = (ErrorKey, FieldError)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// An operation the form refused. The form state is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field {0:?}")]
    UnknownField(String),
    #[error("unknown ingredient field {0:?}")]
    UnknownIngredientField(String),
    #[error("field {field} is not part of the {variant} form")]
    FieldNotInVariant { field: Field, variant: FormVariant },
    #[error("{value:?} is not an option for {field}")]
    NotAnOption { field: Field, value: String },
    #[error("{0:?} is not a unit")]
    NotAUnit(String),
    #[error("no ingredient at index {0}")]
    NoSuchIngredient(usize),
    #[error("the recipe has already been submitted")]
    AlreadySubmitted,
    #[error("there is no submitted recipe")]
    NotSubmitted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_rendering() {
        assert_eq!(ErrorKey::from(Field::ImageUrl).to_string(), "imageUrl");
        assert_eq!(
            ErrorKey::ingredient(3, IngredientField::Quantity).to_string(),
            "ingredient_3_quantity"
        );
    }

    #[test]
    fn test_patch() {
        let mut errors = ErrorMap::new();
        let key = ErrorKey::Field(Field::Title);
        errors.patch(key, Err(FieldError::TitleLength));
        assert_eq!(errors.message(&key).as_deref(), Some("Title must be 3-50 characters"));
        assert_eq!(
            errors.message_for("title").as_deref(),
            Some("Title must be 3-50 characters")
        );
        errors.patch(key, Ok(()));
        assert!(errors.is_empty());
        assert_eq!(errors.message_for("title"), None);
    }

    #[test]
    fn test_field_keys_sort_before_ingredients() {
        let errors: ErrorMap = [
            (ErrorKey::ingredient(0, IngredientField::Name), FieldError::NameRequired),
            (ErrorKey::Field(Field::Cuisine), FieldError::CuisineRequired),
        ]
        .into_iter()
        .collect();
        let keys: Vec<String> = errors.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["cuisine", "ingredient_0_name"]);
    }
}
