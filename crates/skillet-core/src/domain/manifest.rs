//! Typed model of `skill.json` (the skill manifest).
//!
//! A template clone carries the template's own manifest name; the settings
//! updater rewrites it for the fresh project. Only the locale display names
//! are typed here; every other manifest field passes through untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const DEFAULT_LOCALE: &str = "en-US";

/// Parsed content of `skill.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub manifest: ManifestBody,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestBody {
    #[serde(default, skip_serializing_if = "PublishingInformation::is_empty")]
    pub publishing_information: PublishingInformation,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublishingInformation {
    #[serde(default)]
    pub locales: BTreeMap<String, LocaleInfo>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl PublishingInformation {
    fn is_empty(&self) -> bool {
        self.locales.is_empty() && self.extra.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocaleInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Manifest {
    /// Parse from the raw file content.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Serialize back to pretty JSON for persistence.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The skill display name, read from the first locale that carries one.
    pub fn skill_name(&self) -> Option<&str> {
        self.manifest
            .publishing_information
            .locales
            .values()
            .find_map(|l| l.name.as_deref())
    }

    /// Set the skill display name across every locale.
    ///
    /// A manifest without locales gets an `en-US` entry so the name is
    /// never silently dropped.
    pub fn set_skill_name(&mut self, name: &str) {
        let locales = &mut self.manifest.publishing_information.locales;
        if locales.is_empty() {
            locales.insert(DEFAULT_LOCALE.to_string(), LocaleInfo::default());
        }
        for locale in locales.values_mut() {
            locale.name = Some(name.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "manifest": {
            "publishingInformation": {
                "locales": {
                    "en-US": { "name": "template name", "summary": "a template" },
                    "de-DE": { "name": "vorlage" }
                }
            },
            "apis": { "custom": {} }
        }
    }"#;

    #[test]
    fn reads_skill_name() {
        let m = Manifest::from_json(FIXTURE).unwrap();
        // BTreeMap order: de-DE sorts first.
        assert_eq!(m.skill_name(), Some("vorlage"));
    }

    #[test]
    fn set_skill_name_updates_all_locales() {
        let mut m = Manifest::from_json(FIXTURE).unwrap();
        m.set_skill_name("hello world");
        for locale in m.manifest.publishing_information.locales.values() {
            assert_eq!(locale.name.as_deref(), Some("hello world"));
        }
    }

    #[test]
    fn set_skill_name_on_empty_manifest_creates_default_locale() {
        let mut m = Manifest::default();
        m.set_skill_name("fresh");
        assert_eq!(m.skill_name(), Some("fresh"));
        assert!(
            m.manifest
                .publishing_information
                .locales
                .contains_key("en-US")
        );
    }

    #[test]
    fn untyped_manifest_fields_survive_a_roundtrip() {
        let m = Manifest::from_json(FIXTURE).unwrap();
        let rewritten = m.to_json_pretty().unwrap();
        assert!(rewritten.contains("\"apis\""));
        assert!(rewritten.contains("\"summary\""));
        assert_eq!(Manifest::from_json(&rewritten).unwrap(), m);
    }
}
