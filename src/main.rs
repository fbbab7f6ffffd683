use anyhow::{Context, Result, anyhow};
use leptos::logging::{log, warn};
use leptos::prelude::*;
use recipe_form::{App, FormConfig};

fn page_config() -> Result<FormConfig> {
    let search = web_sys::window()
        .context("no window")?
        .location()
        .search()
        .map_err(|err| anyhow!("cannot read page location: {err:?}"))?;
    Ok(FormConfig::from_query(&search))
}

fn main() {
    console_error_panic_hook::set_once();
    let config = page_config().unwrap_or_else(|err| {
        warn!("{err}, using the default form");
        FormConfig::default()
    });
    log!("Mounting {} recipe form", config.variant);
    leptos::mount::mount_to_body(move || view! { <App config /> });
}
