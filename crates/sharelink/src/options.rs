use std::path::Path;

use libs::anyhow::{anyhow, bail, Context, Error};
use libs::{log, serde_json, toml};
use serde::{Deserialize, Deserializer, Serialize};
use sharelink_model::ShareRequest;

use crate::analytics::AnalyticsConfig;
use crate::popup::PopupConfig;
use crate::{DEFAULT_LIBRARY, DEFAULT_PREFIX};

/// Everything a [`LinkBuilder`](crate::LinkBuilder) is built from, except the
/// analytics counter itself.
///
/// Field names follow the camelCase option names (`isCanvas`) when loaded
/// from TOML or JSON. Unset fields take the documented defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ShareOptions {
    pub url: Option<String>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    /// Goal name prefix, [`DEFAULT_PREFIX`] when unset or empty.
    pub prefix: Option<String>,
    /// One of `vanilla`, `vue` or `react`, [`DEFAULT_LIBRARY`] when unset.
    pub library: Option<String>,
    /// Counter id, required by the `vanilla` library. Accepts numbers too.
    #[serde(deserialize_with = "string_or_number")]
    pub id: Option<String>,
    pub is_canvas: bool,
    pub mode: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(Option::<Id>::deserialize(deserializer)?.map(|id| match id {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    }))
}

impl ShareOptions {
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        toml::from_str(text)
            .map_err(|e| anyhow!("Unable to parse share options TOML because of {}", e))
    }

    pub fn from_json_str(text: &str) -> Result<Self, Error> {
        serde_json::from_str(text)
            .map_err(|e| anyhow!("Unable to parse share options JSON because of {}", e))
    }

    /// Reads options from a `.toml` or `.json` file.
    pub fn read(path_ref: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path_ref.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Error reading share options {}", path.display()))?;

        log::debug!("Share options found at '{}'", path.display());
        let options = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            Some("json") => Self::from_json_str(&text),
            _ => bail!(
                "Unsupported share options format: {} (expected .toml or .json)",
                path.display()
            ),
        };
        options.with_context(|| format!("Invalid share options {}", path.display()))
    }

    pub fn request(&self) -> ShareRequest {
        ShareRequest {
            url: self.url.clone(),
            title: self.title.clone(),
            image: self.image.clone(),
            description: self.description.clone(),
        }
    }

    pub fn analytics(&self) -> AnalyticsConfig {
        AnalyticsConfig {
            prefix: self
                .prefix
                .clone()
                .filter(|prefix| !prefix.is_empty())
                .unwrap_or_else(|| String::from(DEFAULT_PREFIX)),
            library: self
                .library
                .clone()
                .filter(|library| !library.is_empty())
                .unwrap_or_else(|| String::from(DEFAULT_LIBRARY)),
            id: self.id.clone(),
            metrics: None,
        }
    }

    pub fn popup(&self) -> PopupConfig {
        PopupConfig {
            mode: self.mode.clone().unwrap_or_default(),
            is_canvas: self.is_canvas,
            ..Default::default()
        }
    }
}
