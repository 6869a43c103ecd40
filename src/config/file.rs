//
//  clumio-sdk
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Profile File
//!
//! Optional TOML file holding named connection profiles:
//!
//! ```toml
//! [profiles.default]
//! hostname = "us-east-1.api.clumio.com"
//! organizational_unit_context = "00000000-0000-0000-0000-000000000000"
//! raw_response = false
//!
//! [profiles.default.custom_headers]
//! x-request-source = "nightly-audit"
//! ```
//!
//! Tokens may be stored in a profile but are usually left to the
//! `CLUMIO_API_TOKEN` environment variable.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::ConfigBuilder;
use crate::api::common::{ClumioError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

/// One named set of connection settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_unit_context: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<bool>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_headers: BTreeMap<String, String>,
}

impl ConfigFile {
    /// `config.toml` in the platform config directory for `clumio`.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "clumio")
            .ok_or_else(|| ClumioError::configuration("could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Loads the default file; a missing file is an empty configuration.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClumioError::configuration(format!("could not read {}: {e}", path.display()))
        })?;
        toml::from_str(&content).map_err(|e| {
            ClumioError::configuration(format!("could not parse {}: {e}", path.display()))
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ClumioError::configuration(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ClumioError::configuration(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| ClumioError::configuration(e.to_string()))
    }

    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }
}

impl Profile {
    /// Seeds `builder` with every setting this profile defines.
    pub fn apply(&self, mut builder: ConfigBuilder) -> ConfigBuilder {
        if let Some(hostname) = &self.hostname {
            builder = builder.hostname(hostname);
        }
        if let Some(token) = &self.api_token {
            builder = builder.api_token(token);
        }
        if let Some(context) = &self.organizational_unit_context {
            builder = builder.organizational_unit_context(context);
        }
        if let Some(raw) = self.raw_response {
            builder = builder.raw_response(raw);
        }
        for (name, value) in &self.custom_headers {
            builder = builder.custom_header(name, value);
        }
        builder
    }
}
