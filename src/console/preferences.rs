//! Saved console preferences.
//!
//! Preferences travel as JSON in the `apiconsole` cookie and in the location
//! hash of share links. Field names are part of that format.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Cookie the preferences are stored under.
pub const PREFERENCES_COOKIE: &str = "apiconsole";

/// Absent fields are `None`; a present empty string still counts as set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frameworkurl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apikey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apioptions: Option<String>,
    /// Extra parameters appended after the user's options when resolving.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extendapioptions: Option<String>,
}

impl Preferences {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse preferences")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize preferences")
    }

    /// Overwrite fields with every field present in `other`, empty or not.
    pub fn extend(&mut self, other: Preferences) {
        replace(&mut self.framework, other.framework);
        replace(&mut self.frameworkurl, other.frameworkurl);
        replace(&mut self.apikey, other.apikey);
        replace(&mut self.apioptions, other.apioptions);
        replace(&mut self.extendapioptions, other.extendapioptions);
    }

    /// Extension options, if any are set.
    pub fn extension(&self) -> Option<&str> {
        non_empty(&self.extendapioptions)
    }
}

fn replace(target: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *target = value;
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn overwrite(target: &mut String, value: Option<&str>) {
    if let Some(value) = value {
        *target = value.to_string();
    }
}

/// The options form: framework selector, custom URL, API key and options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsForm {
    /// A framework URL, or `custom`.
    pub framework: String,
    pub framework_url: String,
    pub api_key: String,
    pub api_options: String,
}

impl OptionsForm {
    pub fn new(default_framework: impl Into<String>) -> Self {
        Self {
            framework: default_framework.into(),
            ..Default::default()
        }
    }

    /// Copy saved values into the form; empty values leave fields untouched.
    pub fn restore(&mut self, saved: &Preferences) {
        overwrite(&mut self.framework, non_empty(&saved.framework));
        overwrite(&mut self.framework_url, non_empty(&saved.frameworkurl));
        overwrite(&mut self.api_options, non_empty(&saved.apioptions));
        overwrite(&mut self.api_key, non_empty(&saved.apikey));
    }

    /// Snapshot the form as preferences.
    pub fn to_preferences(&self) -> Preferences {
        Preferences {
            framework: Some(self.framework.clone()),
            frameworkurl: Some(self.framework_url.clone()),
            apikey: Some(self.api_key.clone()),
            apioptions: Some(self.api_options.clone()),
            extendapioptions: None,
        }
    }
}
