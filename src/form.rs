//! The form's state machine: the draft being edited, its current errors,
//! and whether the last submission is being shown.

use crate::config::FormVariant;
use crate::errors::{ErrorKey, ErrorMap, FormError};
use crate::options::{Category, Cuisine, Difficulty, Unit, is_option};
use crate::recipe::{Field, Ingredient, IngredientField, RecipeDraft};
use crate::validation::{validate_field, validate_form, validate_ingredient};
use leptos::logging::{log, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Editing,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Rejected { errors: ErrorMap },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeForm {
    variant: FormVariant,
    draft: RecipeDraft,
    errors: ErrorMap,
    mode: ViewMode,
    submitted: Option<RecipeDraft>,
}

impl Default for RecipeForm {
    fn default() -> Self {
        RecipeForm::new(FormVariant::default())
    }
}

impl RecipeForm {
    pub fn new(variant: FormVariant) -> Self {
        RecipeForm {
            variant,
            draft: RecipeDraft::new(variant),
            errors: ErrorMap::new(),
            mode: ViewMode::Editing,
            submitted: None,
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn draft(&self) -> &RecipeDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The recipe accepted by the last successful submit, while it is shown.
    pub fn submitted(&self) -> Option<&RecipeDraft> {
        self.submitted.as_ref()
    }

    pub fn error_for(&self, key: impl Into<ErrorKey>) -> Option<String> {
        self.errors.message(&key.into())
    }

    pub fn can_remove_ingredient(&self) -> bool {
        self.draft.ingredients().len() > 1
    }

    /// Sets a top-level field and re-checks that field alone.
    pub fn edit_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();
        if !value.is_empty() && !is_allowed_choice(field, &value) {
            return Err(FormError::NotAnOption { field, value });
        }
        let variant = self.variant;
        let not_in_variant = FormError::FieldNotInVariant { field, variant };
        if !field.in_variant(variant) {
            return Err(not_in_variant);
        }
        let slot = self.draft.value_mut(field).ok_or(not_in_variant)?;
        let outcome = validate_field(field, &value);
        *slot = value;
        self.errors.patch(ErrorKey::Field(field), outcome);
        Ok(())
    }

    /// [`RecipeForm::edit_field`] keyed by the input's `name` attribute.
    pub fn edit_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = name
            .parse::<Field>()
            .map_err(|_| FormError::UnknownField(name.to_string()))?;
        self.edit_field(field, value)
    }

    /// Sets one input of an ingredient row. The whole row is validated, but
    /// only the edited input's error is updated; errors already shown on the
    /// row's other inputs stay until those inputs are edited or the form is
    /// submitted.
    pub fn edit_ingredient(
        &mut self,
        index: usize,
        field: IngredientField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let value = value.into();
        if field == IngredientField::Unit && !value.is_empty() && !is_option::<Unit>(&value) {
            return Err(FormError::NotAUnit(value));
        }
        let ingredient = self
            .draft
            .ingredient_mut(index)
            .ok_or(FormError::NoSuchIngredient(index))?;
        ingredient.set(field, value);
        let outcome = match validate_ingredient(ingredient).get(&field) {
            Some(err) => Err(*err),
            None => Ok(()),
        };
        self.errors.patch(ErrorKey::ingredient(index, field), outcome);
        Ok(())
    }

    pub fn edit_ingredient_named(
        &mut self,
        index: usize,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let field = name
            .parse::<IngredientField>()
            .map_err(|_| FormError::UnknownIngredientField(name.to_string()))?;
        self.edit_ingredient(index, field, value)
    }

    /// Appends a blank ingredient row. Nothing is validated.
    pub fn add_ingredient(&mut self) {
        self.draft.push_ingredient(Ingredient::default());
    }

    /// Removes an ingredient row unless it is the only one.
    ///
    /// Errors of the removed row are dropped and errors of the rows after
    /// it move up with them, so every message stays next to its row.
    pub fn remove_ingredient(&mut self, index: usize) -> Option<Ingredient> {
        let removed = self.draft.remove_ingredient(index)?;
        let shifted: ErrorMap = self
            .errors
            .iter()
            .filter_map(|(key, err)| match *key {
                ErrorKey::Ingredient { index: i, .. } if i == index => None,
                ErrorKey::Ingredient { index: i, field } if i > index => {
                    Some((ErrorKey::ingredient(i - 1, field), *err))
                }
                key => Some((key, *err)),
            })
            .collect();
        self.errors = shifted;
        Some(removed)
    }

    /// Validates the whole draft. On failure every error is shown at once and
    /// the form stays in editing mode; on success the draft becomes the shown
    /// recipe and the form is reset to a blank draft.
    pub fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        if self.mode == ViewMode::Submitted {
            return Err(FormError::AlreadySubmitted);
        }
        let errors = validate_form(&self.draft);
        if !errors.is_empty() {
            warn!("Recipe rejected with {} error(s)", errors.len());
            self.errors = errors.clone();
            return Ok(SubmitOutcome::Rejected { errors });
        }

        let recipe = std::mem::replace(&mut self.draft, RecipeDraft::new(self.variant));
        log!("Recipe submitted: {}", recipe.title);
        self.submitted = Some(recipe);
        self.mode = ViewMode::Submitted;
        self.errors.clear();
        Ok(SubmitOutcome::Submitted)
    }

    /// Leaves the recipe card and returns to the (already blank) form.
    pub fn start_new(&mut self) -> Result<(), FormError> {
        if self.mode != ViewMode::Submitted {
            return Err(FormError::NotSubmitted);
        }
        self.submitted = None;
        self.mode = ViewMode::Editing;
        Ok(())
    }
}

fn is_allowed_choice(field: Field, value: &str) -> bool {
    match field {
        Field::Difficulty => is_option::<Difficulty>(value),
        Field::Category => is_option::<Category>(value),
        Field::Cuisine => is_option::<Cuisine>(value),
        _ => true,
    }
}
