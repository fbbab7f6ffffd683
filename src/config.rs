//! Page-level configuration, read from the URL query string.

use leptos::logging::warn;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which field set the form offers.
///
/// `Minimal` covers the basic recipe fields; `Extended` adds prep time,
/// cook time and directions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FormVariant {
    Minimal,
    #[default]
    Extended,
}

impl FormVariant {
    pub fn is_extended(self) -> bool {
        self == FormVariant::Extended
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub variant: FormVariant,
}

impl FormConfig {
    pub const VARIANT_PARAM: &'static str = "variant";

    /// Builds a config from a query string such as `?variant=minimal`.
    /// Unknown keys are ignored; a bad variant falls back to the default.
    pub fn from_query(query: &str) -> FormConfig {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut config = FormConfig::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if key != Self::VARIANT_PARAM {
                continue;
            }
            match value.parse::<FormVariant>() {
                Ok(variant) => config.variant = variant,
                Err(_) => warn!(
                    "Unknown form variant {value:?}, using {}",
                    FormVariant::default()
                ),
            }
        }
        config
    }
}
