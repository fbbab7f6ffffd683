//! Inputs for top-level recipe fields, each with its error line.

use crate::errors::ErrorKey;
use crate::form::RecipeForm;
use crate::recipe::Field;
use leptos::logging::warn;
use leptos::prelude::*;

fn edit(form: RwSignal<RecipeForm>, field: Field, value: String) {
    form.update(|form| {
        if let Err(err) = form.edit_field(field, value) {
            warn!("Edit of {field} ignored: {err}");
        }
    });
}

fn current_value(form: RwSignal<RecipeForm>, field: Field) -> impl Fn() -> String + Copy {
    move || form.with(|form| form.draft().value(field).unwrap_or_default().to_string())
}

/// Shows the message stored under `key`, or nothing.
#[component]
pub fn ErrorMessage(form: RwSignal<RecipeForm>, key: ErrorKey) -> impl IntoView {
    move || {
        form.with(|form| form.error_for(key))
            .map(|message| view! { <p class="error-message">{message}</p> })
    }
}

/// ### TextField component
/// A single-line input bound to one recipe field.
///
/// ### Parameters
/// `input_type`: the HTML input type, `text` unless given
#[component]
pub fn TextField(
    form: RwSignal<RecipeForm>,
    field: Field,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form-label">{label}</label>
            <input
                type=input_type
                name=field.to_string()
                class="form-input"
                placeholder=placeholder
                prop:value=current_value(form, field)
                on:input=move |ev| edit(form, field, event_target_value(&ev))
            />
            <ErrorMessage form key=ErrorKey::Field(field) />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    form: RwSignal<RecipeForm>,
    field: Field,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form-label">{label}</label>
            <textarea
                name=field.to_string()
                rows=rows.to_string()
                class="form-textarea"
                placeholder=placeholder
                prop:value=current_value(form, field)
                on:input=move |ev| edit(form, field, event_target_value(&ev))
            />
            <ErrorMessage form key=ErrorKey::Field(field) />
        </div>
    }
}

/// ### SelectField component
/// A dropdown over a fixed option set, with an empty "Select..." entry first.
///
/// ### Parameters
/// `options`: labels in display order, see [`crate::options::labels`]
#[component]
pub fn SelectField(
    form: RwSignal<RecipeForm>,
    field: Field,
    label: &'static str,
    options: Vec<&'static str>,
) -> impl IntoView {
    let value = current_value(form, field);
    view! {
        <div class="form-group">
            <label class="form-label">{label}</label>
            <select
                name=field.to_string()
                class="form-select"
                prop:value=value
                on:change=move |ev| edit(form, field, event_target_value(&ev))
            >
                <option value="">"Select..."</option>
                {options
                    .into_iter()
                    .map(|option| {
                        view! {
                            <option value=option selected=move || value() == option>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <ErrorMessage form key=ErrorKey::Field(field) />
        </div>
    }
}
