pub mod config;
pub mod errors;
pub mod form;
mod frontend;
pub mod options;
pub mod recipe;
pub mod validation;

pub use config::{FormConfig, FormVariant};
pub use errors::{ErrorKey, ErrorMap, FieldError, FormError};
pub use form::{RecipeForm, SubmitOutcome, ViewMode};
pub use frontend::App;
pub use recipe::{Field, Ingredient, IngredientField, RecipeDraft};
pub use validation::{validate_field, validate_form, validate_ingredient, validate_named};
