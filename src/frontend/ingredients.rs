use super::fields::ErrorMessage;
use crate::errors::ErrorKey;
use crate::form::RecipeForm;
use crate::options::{Unit, labels};
use crate::recipe::IngredientField;
use leptos::logging::warn;
use leptos::prelude::*;

/// ### IngredientList component
/// One row per ingredient plus the "+ Add Ingredient" button.
///
/// Rows are keyed by position and read their values from the form, so after
/// a removal every row shows the ingredient now at its index.
#[component]
pub fn IngredientList(form: RwSignal<RecipeForm>) -> impl IntoView {
    let count = move || form.with(|form| form.draft().ingredients().len());

    view! {
        <div class="ingredients-section">
            <h2 class="ingredients-title">"Ingredients"</h2>
            <For
                each=move || 0..count()
                key=|index| *index
                children=move |index| view! { <IngredientRow form index /> }
            />
            <button
                type="button"
                class="add-ingredient-btn"
                on:click=move |_| form.update(RecipeForm::add_ingredient)
            >
                "+ Add Ingredient"
            </button>
        </div>
    }
}

#[component]
fn IngredientRow(form: RwSignal<RecipeForm>, index: usize) -> impl IntoView {
    let text = move |field: IngredientField| {
        move || {
            form.with(|form| {
                form.draft()
                    .ingredients()
                    .get(index)
                    .map(|ingredient| ingredient.get(field).to_string())
                    .unwrap_or_default()
            })
        }
    };
    let edit = move |field: IngredientField| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|form| {
                if let Err(err) = form.edit_ingredient(index, field, value) {
                    warn!("Edit of ingredient {index} ignored: {err}");
                }
            });
        }
    };
    let unit = text(IngredientField::Unit);

    view! {
        <div class="ingredient-card">
            <div class="ingredient-header">
                <span class="ingredient-label">{format!("Ingredient {}", index + 1)}</span>
                <Show when=move || form.with(RecipeForm::can_remove_ingredient)>
                    <button
                        type="button"
                        class="remove-btn"
                        on:click=move |_| {
                            form.update(|form| {
                                form.remove_ingredient(index);
                            })
                        }
                    >
                        "Remove"
                    </button>
                </Show>
            </div>
            <div class="ingredient-inputs">
                <div class="ingredient-name">
                    <input
                        type="text"
                        placeholder="Name"
                        class="form-input"
                        prop:value=text(IngredientField::Name)
                        on:input=edit(IngredientField::Name)
                    />
                    <ErrorMessage form key=ErrorKey::ingredient(index, IngredientField::Name) />
                </div>
                <div>
                    <input
                        type="number"
                        step="0.1"
                        placeholder="Quantity"
                        class="form-input"
                        prop:value=text(IngredientField::Quantity)
                        on:input=edit(IngredientField::Quantity)
                    />
                    <ErrorMessage form key=ErrorKey::ingredient(index, IngredientField::Quantity) />
                </div>
                <div>
                    <select class="form-select" prop:value=unit on:change=edit(IngredientField::Unit)>
                        <option value="">"Unit"</option>
                        {labels::<Unit>()
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <option value=option selected=move || unit() == option>
                                        {option}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <ErrorMessage form key=ErrorKey::ingredient(index, IngredientField::Unit) />
                </div>
            </div>
        </div>
    }
}
