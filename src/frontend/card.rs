use crate::form::RecipeForm;
use crate::recipe::RecipeDraft;
use leptos::logging::warn;
use leptos::prelude::*;

/// ### RecipeCard component
/// Read-only view of a submitted recipe.
///
/// ### Parameters
/// `recipe`: the accepted draft
///
/// `form`: used by "Submit Another Recipe" to return to the form
#[component]
pub fn RecipeCard(form: RwSignal<RecipeForm>, recipe: RecipeDraft) -> impl IntoView {
    let ingredients = recipe
        .ingredients()
        .iter()
        .map(|ingredient| {
            view! {
                <li>
                    <span class="ingredient-bullet">"•"</span>
                    <span>{ingredient.summary()}</span>
                </li>
            }
        })
        .collect_view();
    let total_time = recipe
        .total_time()
        .map(|minutes| view! { <span>{format!("⏱️ {minutes} min")}</span> });
    let directions = recipe.directions.clone().map(|directions| {
        view! {
            <div class="directions-display">
                <h2>"Directions"</h2>
                <p>{directions}</p>
            </div>
        }
    });

    view! {
        <div class="success-container">
            <div class="success-card">
                <div class="recipe-image-container">
                    <img src=recipe.image_url.clone() alt=recipe.title.clone() class="recipe-image" />
                    <div class="recipe-header">
                        <h1 class="recipe-name">{recipe.title.clone()}</h1>
                        <div class="recipe-meta">
                            <span>{format!("🍽️ {} Servings", recipe.servings)}</span>
                            <span>{format!("📊 {}", recipe.difficulty)}</span>
                            <span>{format!("🌍 {}", recipe.cuisine)}</span>
                            {total_time}
                        </div>
                    </div>
                </div>
                <div class="recipe-content">
                    <div class="recipe-description">
                        <p>{recipe.description.clone()}</p>
                    </div>
                    <div class="ingredients-display">
                        <h2>"Ingredients"</h2>
                        <ul class="ingredients-list">{ingredients}</ul>
                    </div>
                    {directions}
                    <div class="recipe-tags">
                        <span class="recipe-tag category-tag">{recipe.category.clone()}</span>
                        <span class="recipe-tag cuisine-tag">{recipe.cuisine.clone()}</span>
                    </div>
                    <button
                        class="new-recipe-btn"
                        on:click=move |_| {
                            form.update(|form| {
                                if let Err(err) = form.start_new() {
                                    warn!("{err}");
                                }
                            })
                        }
                    >
                        "Submit Another Recipe"
                    </button>
                </div>
            </div>
        </div>
    }
}
