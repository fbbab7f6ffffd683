//! Validation rules for single fields, ingredient rows and whole recipes.
//!
//! Every function here is pure: the same input always yields the same
//! errors, and nothing panics on malformed text.

use crate::errors::{ErrorKey, ErrorMap, FieldError};
use crate::recipe::{Field, Ingredient, IngredientField, RecipeDraft};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use url::Url;

const TITLE_LEN: RangeInclusive<usize> = 3..=50;
const DESCRIPTION_LEN: RangeInclusive<usize> = 10..=500;
const DIRECTIONS_MIN_LEN: usize = 10;
const INGREDIENT_NAME_LEN: RangeInclusive<usize> = 2..=50;
const SERVINGS: RangeInclusive<f64> = 1.0..=20.0;
const MINUTES: RangeInclusive<f64> = 1.0..=600.0;
const QUANTITY: RangeInclusive<f64> = 0.1..=1000.0;

/// Per-input errors of one ingredient row. Inputs that pass are absent.
pub type IngredientErrors = BTreeMap<IngredientField, FieldError>;

/// Checks one top-level field value.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    match field {
        Field::Title => {
            require(value, FieldError::TitleRequired)?;
            check_len(value, TITLE_LEN, FieldError::TitleLength)
        }
        Field::Description => {
            require(value, FieldError::DescriptionRequired)?;
            check_len(value, DESCRIPTION_LEN, FieldError::DescriptionLength)
        }
        Field::Servings => {
            require(value, FieldError::ServingsRequired)?;
            check_number(value, SERVINGS, FieldError::ServingsRange)
        }
        Field::PrepTime => {
            require(value, FieldError::PrepTimeRequired)?;
            check_number(value, MINUTES, FieldError::PrepTimeRange)
        }
        Field::CookTime => {
            require(value, FieldError::CookTimeRequired)?;
            check_number(value, MINUTES, FieldError::CookTimeRange)
        }
        Field::Directions => {
            require(value, FieldError::DirectionsRequired)?;
            check_len(value, DIRECTIONS_MIN_LEN..=usize::MAX, FieldError::DirectionsLength)
        }
        // Option membership is enforced when the value is set, not here
        Field::Difficulty => require(value, FieldError::DifficultyRequired),
        Field::Category => require(value, FieldError::CategoryRequired),
        Field::Cuisine => require(value, FieldError::CuisineRequired),
        Field::ImageUrl => {
            require(value, FieldError::ImageUrlRequired)?;
            Url::parse(value)
                .map(|_| ())
                .map_err(|_| FieldError::ImageUrlInvalid)
        }
    }
}

/// Like [`validate_field`], keyed by the field's markup name.
/// Names that are not recipe fields always pass.
pub fn validate_named(name: &str, value: &str) -> Result<(), FieldError> {
    match name.parse::<Field>() {
        Ok(field) => validate_field(field, value),
        Err(_) => Ok(()),
    }
}

/// Checks every input of one ingredient row.
pub fn validate_ingredient(ingredient: &Ingredient) -> IngredientErrors {
    let mut errors = IngredientErrors::new();

    if ingredient.name.trim().is_empty() {
        errors.insert(IngredientField::Name, FieldError::NameRequired);
    } else if check_len(&ingredient.name, INGREDIENT_NAME_LEN, FieldError::NameLength).is_err() {
        errors.insert(IngredientField::Name, FieldError::NameLength);
    }

    if ingredient.quantity.trim().is_empty() {
        errors.insert(IngredientField::Quantity, FieldError::QuantityRequired);
    } else if let Err(err) = check_number(&ingredient.quantity, QUANTITY, FieldError::QuantityRange)
    {
        errors.insert(IngredientField::Quantity, err);
    }

    if ingredient.unit.trim().is_empty() {
        errors.insert(IngredientField::Unit, FieldError::UnitRequired);
    }

    errors
}

/// Checks a whole draft: every field it carries and every ingredient row.
/// The result holds failing keys only, so an empty map means the draft
/// can be submitted.
pub fn validate_form(draft: &RecipeDraft) -> ErrorMap {
    let mut errors: ErrorMap = draft
        .fields()
        .filter_map(|(field, value)| {
            validate_field(field, value)
                .err()
                .map(|err| (ErrorKey::Field(field), err))
        })
        .collect();

    for (index, ingredient) in draft.ingredients().iter().enumerate() {
        errors.extend(
            validate_ingredient(ingredient)
                .into_iter()
                .map(|(field, err)| (ErrorKey::ingredient(index, field), err)),
        );
    }

    errors
}

/// Converts input text to a number the way a browser number input does.
///
/// Surrounding whitespace is ignored and blank text is zero. Decimal and
/// exponent forms, `Infinity` with an optional sign, and unsigned
/// `0x`/`0o`/`0b` integers are numbers; everything else is `None`.
pub fn coerce_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let digits = text
            .strip_prefix(prefix)
            .or_else(|| text.strip_prefix(&prefix.to_ascii_uppercase()));
        if let Some(digits) = digits {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    // Keeps out spellings only Rust accepts, such as "inf" or "NaN"
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return None;
    }
    text.parse::<f64>().ok()
}

fn require(value: &str, missing: FieldError) -> Result<(), FieldError> {
    if value.is_empty() { Err(missing) } else { Ok(()) }
}

fn check_len(value: &str, allowed: RangeInclusive<usize>, error: FieldError) -> Result<(), FieldError> {
    if allowed.contains(&value.chars().count()) {
        Ok(())
    } else {
        Err(error)
    }
}

fn check_number(value: &str, allowed: RangeInclusive<f64>, error: FieldError) -> Result<(), FieldError> {
    match coerce_number(value) {
        Some(n) if allowed.contains(&n) => Ok(()),
        _ => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormVariant;

    fn pancakes() -> RecipeDraft {
        let mut draft = RecipeDraft::new(FormVariant::Minimal);
        draft.title = "Pancakes".to_string();
        draft.description = "Fluffy stack".to_string();
        draft.servings = "4".to_string();
        draft.difficulty = "Easy".to_string();
        draft.category = "Main Course".to_string();
        draft.cuisine = "American".to_string();
        draft.image_url = "https://x.com/a.jpg".to_string();
        let flour = draft.ingredient_mut(0).unwrap();
        flour.name = "Flour".to_string();
        flour.quantity = "2".to_string();
        flour.unit = "cups".to_string();
        draft
    }

    #[test]
    fn test_title_length() {
        assert_eq!(validate_field(Field::Title, ""), Err(FieldError::TitleRequired));
        for len in [1, 2, 51, 80] {
            let title = "a".repeat(len);
            assert_eq!(validate_field(Field::Title, &title), Err(FieldError::TitleLength));
        }
        for len in [3, 9, 50] {
            assert!(validate_field(Field::Title, &"a".repeat(len)).is_ok());
        }
        // Length counts characters, not bytes
        assert!(validate_field(Field::Title, "Crème brûlée").is_ok());
    }

    #[test]
    fn test_description_and_directions() {
        assert_eq!(
            validate_field(Field::Description, "too short"),
            Err(FieldError::DescriptionLength)
        );
        assert!(validate_field(Field::Description, "just enough").is_ok());
        assert_eq!(
            validate_field(Field::Description, &"x".repeat(501)),
            Err(FieldError::DescriptionLength)
        );
        assert_eq!(validate_field(Field::Directions, ""), Err(FieldError::DirectionsRequired));
        assert_eq!(validate_field(Field::Directions, "Mix."), Err(FieldError::DirectionsLength));
        assert!(validate_field(Field::Directions, &"Stir well. ".repeat(200)).is_ok());
    }

    #[test]
    fn test_servings_range() {
        for n in 1..=20 {
            assert!(validate_field(Field::Servings, &n.to_string()).is_ok());
        }
        assert_eq!(validate_field(Field::Servings, ""), Err(FieldError::ServingsRequired));
        for bad in ["0", "21", "-3", "four", "1e9", "NaN", "inf", "   "] {
            assert_eq!(
                validate_field(Field::Servings, bad),
                Err(FieldError::ServingsRange),
                "servings {bad:?}"
            );
        }
        assert!(validate_field(Field::Servings, " 12 ").is_ok());
    }

    #[test]
    fn test_times() {
        assert!(validate_field(Field::PrepTime, "600").is_ok());
        assert_eq!(validate_field(Field::PrepTime, "601"), Err(FieldError::PrepTimeRange));
        assert_eq!(validate_field(Field::CookTime, ""), Err(FieldError::CookTimeRequired));
        assert_eq!(validate_field(Field::CookTime, "0.5"), Err(FieldError::CookTimeRange));
    }

    #[test]
    fn test_choices_only_need_a_value() {
        assert_eq!(validate_field(Field::Difficulty, ""), Err(FieldError::DifficultyRequired));
        assert_eq!(validate_field(Field::Category, ""), Err(FieldError::CategoryRequired));
        assert_eq!(
            validate_field(Field::Cuisine, "").unwrap_err().to_string(),
            "Cuisine type is required"
        );
        assert!(validate_field(Field::Cuisine, "Martian").is_ok());
    }

    #[test]
    fn test_image_url() {
        assert_eq!(validate_field(Field::ImageUrl, ""), Err(FieldError::ImageUrlRequired));
        assert_eq!(validate_field(Field::ImageUrl, "not-a-url"), Err(FieldError::ImageUrlInvalid));
        assert_eq!(validate_field(Field::ImageUrl, "/img/a.jpg"), Err(FieldError::ImageUrlInvalid));
        assert!(validate_field(Field::ImageUrl, "https://x.com/a.jpg").is_ok());
        assert!(validate_field(Field::ImageUrl, "data:image/png;base64,AAAA").is_ok());
    }

    #[test]
    fn test_unknown_names_pass() {
        assert!(validate_named("favouriteColour", "").is_ok());
        assert_eq!(validate_named("title", "ab"), Err(FieldError::TitleLength));
    }

    #[test]
    fn test_ingredient() {
        let errors = validate_ingredient(&Ingredient::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[&IngredientField::Name], FieldError::NameRequired);
        assert_eq!(errors[&IngredientField::Unit], FieldError::UnitRequired);

        let mut salt = Ingredient {
            name: "S".to_string(),
            quantity: "0.1".to_string(),
            unit: "grams".to_string(),
        };
        let errors = validate_ingredient(&salt);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&IngredientField::Name], FieldError::NameLength);

        salt.name = "   ".to_string();
        assert_eq!(
            validate_ingredient(&salt)[&IngredientField::Name],
            FieldError::NameRequired
        );
    }

    #[test]
    fn test_quantity_range() {
        let mut egg = Ingredient {
            name: "Egg".to_string(),
            quantity: String::new(),
            unit: "pieces".to_string(),
        };
        for good in ["0.1", "1", "2.5", "1000", "1e3", ".5"] {
            egg.quantity = good.to_string();
            assert!(!validate_ingredient(&egg).contains_key(&IngredientField::Quantity), "{good}");
        }
        for bad in ["0", "0.09", "1000.5", "-1", "lots", "Infinity"] {
            egg.quantity = bad.to_string();
            assert_eq!(
                validate_ingredient(&egg).get(&IngredientField::Quantity),
                Some(&FieldError::QuantityRange),
                "{bad}"
            );
        }
        egg.quantity = "  ".to_string();
        assert_eq!(
            validate_ingredient(&egg).get(&IngredientField::Quantity),
            Some(&FieldError::QuantityRequired)
        );
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(""), Some(0.0));
        assert_eq!(coerce_number(" 42 "), Some(42.0));
        assert_eq!(coerce_number("4."), Some(4.0));
        assert_eq!(coerce_number("-2e2"), Some(-200.0));
        assert_eq!(coerce_number("0x1F"), Some(31.0));
        assert_eq!(coerce_number("0b101"), Some(5.0));
        assert_eq!(coerce_number("0x"), None);
        assert_eq!(coerce_number("0o9"), None);
        assert_eq!(coerce_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(coerce_number("infinity"), None);
        assert_eq!(coerce_number("nan"), None);
        assert_eq!(coerce_number("1_000"), None);
        assert_eq!(coerce_number("."), None);
    }

    #[test]
    fn test_valid_form() {
        let draft = pancakes();
        assert!(validate_form(&draft).is_empty());
    }

    #[test]
    fn test_form_reports_ingredient_keys() {
        let mut draft = pancakes();
        draft.ingredient_mut(0).unwrap().quantity = "0".to_string();
        let errors = validate_form(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message_for("ingredient_0_quantity").as_deref(),
            Some("Quantity must be 0.1-1000")
        );
    }

    #[test]
    fn test_form_bad_url() {
        let mut draft = pancakes();
        draft.image_url = "not-a-url".to_string();
        let errors = validate_form(&draft);
        assert_eq!(
            errors.message_for("imageUrl").as_deref(),
            Some("Please enter a valid URL")
        );
    }

    #[test]
    fn test_form_covers_variant_fields() {
        let minimal = RecipeDraft::new(FormVariant::Minimal);
        let errors = validate_form(&minimal);
        // seven fields and three ingredient inputs
        assert_eq!(errors.len(), 10);
        assert!(errors.message_for("prepTime").is_none());

        let extended = RecipeDraft::new(FormVariant::Extended);
        let errors = validate_form(&extended);
        assert_eq!(errors.len(), 13);
        assert_eq!(
            errors.get(&ErrorKey::Field(Field::Directions)),
            Some(FieldError::DirectionsRequired)
        );
    }

    #[test]
    fn test_form_matches_field_rules_and_is_repeatable() {
        let mut draft = pancakes();
        draft.title = "Pa".to_string();
        draft.servings = "30".to_string();
        draft.push_ingredient(Ingredient::default());

        let first = validate_form(&draft);
        assert_eq!(first, validate_form(&draft));
        for (field, value) in draft.fields() {
            assert_eq!(
                first.get(&ErrorKey::Field(field)),
                validate_field(field, value).err()
            );
        }
        for (index, ingredient) in draft.ingredients().iter().enumerate() {
            for (field, err) in validate_ingredient(ingredient) {
                assert_eq!(first.get(&ErrorKey::ingredient(index, field)), Some(err));
            }
        }
        assert_eq!(first.len(), 2 + 3);
    }
}
