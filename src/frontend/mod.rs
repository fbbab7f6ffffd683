//! Leptos components for the recipe page.
use crate::config::FormConfig;
use crate::form::{RecipeForm, ViewMode};
use crate::options::{Category, Cuisine, Difficulty, labels};
use crate::recipe::Field;
use leptos::logging::warn;
use leptos::prelude::*;

mod card;
mod fields;
mod ingredients;

use card::RecipeCard;
use fields::{SelectField, TextAreaField, TextField};
use ingredients::IngredientList;

/// ### App component
/// Shows the form while editing and the recipe card after a successful submit.
///
/// ### Parameters
/// `config`: selects the minimal or extended field set
#[component]
pub fn App(config: FormConfig) -> impl IntoView {
    let form = RwSignal::new(RecipeForm::new(config.variant));
    // Only a mode change swaps the page; edits must not rebuild the inputs
    let mode = Memo::new(move |_| form.with(RecipeForm::mode));

    move || match mode.get() {
        ViewMode::Editing => view! { <RecipeFormView form /> }.into_any(),
        ViewMode::Submitted => match form.with_untracked(|form| form.submitted().cloned()) {
            Some(recipe) => view! { <RecipeCard form recipe /> }.into_any(),
            None => ().into_any(),
        },
    }
}

#[component]
fn RecipeFormView(form: RwSignal<RecipeForm>) -> impl IntoView {
    let extended = form.with_untracked(|form| form.variant().is_extended());
    let submit = move |_| {
        form.update(|form| {
            if let Err(err) = form.submit() {
                warn!("{err}");
            }
        })
    };

    view! {
        <div class="recipe-container">
            <div class="recipe-card">
                <h1 class="recipe-title">"Share Your Recipe"</h1>
                <p class="recipe-subtitle">"Tell us about your delicious creation"</p>
                <div class="form-section">
                    <TextField
                        form
                        field=Field::Title
                        label="Recipe Title *"
                        placeholder="Good Old-Fashioned Pancakes"
                    />
                    <TextAreaField
                        form
                        field=Field::Description
                        label="Description *"
                        placeholder="This is a great recipe that I have..."
                    />
                    <div class="form-grid form-grid-3">
                        <TextField
                            form
                            field=Field::Servings
                            label="Servings *"
                            placeholder="4"
                            input_type="number"
                        />
                        <SelectField
                            form
                            field=Field::Difficulty
                            label="Difficulty *"
                            options={labels::<Difficulty>()}
                        />
                        <SelectField
                            form
                            field=Field::Category
                            label="Category *"
                            options={labels::<Category>()}
                        />
                    </div>
                    {extended
                        .then(|| {
                            view! {
                                <div class="form-grid form-grid-2">
                                    <TextField
                                        form
                                        field=Field::PrepTime
                                        label="Prep Time (minutes) *"
                                        placeholder="15"
                                        input_type="number"
                                    />
                                    <TextField
                                        form
                                        field=Field::CookTime
                                        label="Cook Time (minutes) *"
                                        placeholder="30"
                                        input_type="number"
                                    />
                                </div>
                            }
                        })}
                    <SelectField
                        form
                        field=Field::Cuisine
                        label="Cuisine Type *"
                        options={labels::<Cuisine>()}
                    />
                    <TextField
                        form
                        field=Field::ImageUrl
                        label="Recipe Image URL *"
                        placeholder="https://example.com/image.jpg"
                        input_type="url"
                    />
                    <IngredientList form />
                    {extended
                        .then(|| {
                            view! {
                                <TextAreaField
                                    form
                                    field=Field::Directions
                                    label="Directions *"
                                    placeholder="Step 1: Mix the dry ingredients..."
                                    rows=6
                                />
                            }
                        })}
                    <button type="button" class="submit-btn" on:click=submit>
                        "Submit Recipe"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormVariant;
    use crate::recipe::RecipeDraft;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_views_build_natively() {
        let owner = Owner::new();
        owner.with(|| {
            let _ = view! { <App config=FormConfig::default() /> };
            for variant in [FormVariant::Minimal, FormVariant::Extended] {
                let form = RwSignal::new(RecipeForm::new(variant));
                let _ = view! { <RecipeFormView form /> };
                let recipe = RecipeDraft::new(variant);
                let _ = view! { <RecipeCard form recipe /> };
            }
        });
    }
}
