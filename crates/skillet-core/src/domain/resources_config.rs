//! Typed model of `ask-resources.json`.
//!
//! The file maps profile names to per-profile settings; this core reads the
//! skill-metadata `src` path and writes the deploy-delegate type under
//! `skillInfrastructure`. Unknown fields are preserved through
//! `#[serde(flatten)]` so a rewrite never drops user content.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::deploy_delegate::DeployDelegateType;

/// Parsed content of a project's `ask-resources.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub askcli_resources_version: Option<String>,

    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileSettings>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Settings for one profile entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSettings {
    #[serde(default, skip_serializing_if = "SkillMetadata::is_empty")]
    pub skill_metadata: SkillMetadata,

    #[serde(default, skip_serializing_if = "SkillInfrastructure::is_empty")]
    pub skill_infrastructure: SkillInfrastructure,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Location of the skill package (`skillMetadata` block).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl SkillMetadata {
    fn is_empty(&self) -> bool {
        self.src.is_none() && self.extra.is_empty()
    }
}

/// Deployment provider info (`skillInfrastructure` block), written by the
/// deploy-delegate initializer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillInfrastructure {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub infra_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_config: Option<Value>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl SkillInfrastructure {
    fn is_empty(&self) -> bool {
        self.infra_type.is_none() && self.user_config.is_none() && self.extra.is_empty()
    }
}

impl ResourcesConfig {
    /// Parse from the raw file content.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Serialize back to pretty JSON for persistence.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The profile's settings, if the profile exists.
    pub fn profile(&self, profile: &str) -> Option<&ProfileSettings> {
        self.profiles.get(profile)
    }

    /// The skill-metadata `src` path for a profile. `None` when the profile
    /// or the field is absent; callers decide how to treat blank values.
    pub fn skill_meta_src(&self, profile: &str) -> Option<&str> {
        self.profiles
            .get(profile)?
            .skill_metadata
            .src
            .as_deref()
    }

    /// Get-or-create the settings entry for a profile.
    pub fn ensure_profile(&mut self, profile: &str) -> &mut ProfileSettings {
        self.profiles.entry(profile.to_string()).or_default()
    }

    /// Record the resolved deploy-delegate type for a profile, creating the
    /// profile entry if needed.
    pub fn set_skill_infra_type(&mut self, profile: &str, ty: &DeployDelegateType) {
        self.ensure_profile(profile).skill_infrastructure.infra_type = Some(ty.to_string());
    }
}
