//! Application metadata for the embedding application
//!
//! This module handles loading, parsing, and validation of the metadata
//! file that describes the host application: its name, identifier,
//! version, and related fields. The loaded value is read-only; callers
//! construct it once at startup and pass it around by reference.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application metadata, read-only after construction
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppInfo {
    /// Internal application name
    name: String,
    /// Name shown to users; falls back to `name` when unset
    display_name: String,
    /// Development language/region code
    language: String,
    /// Reverse-DNS application identifier, e.g. "net.example.myapp"
    identifier: String,
    /// Copyright notice; literal `\n` sequences render as line breaks
    copyright: String,
    /// Build number
    build: String,
    /// Human-facing version string
    version: String,
}

impl AppInfo {
    /// Load metadata from file or return defaults
    pub fn load() -> Result<Self> {
        let info_path = Self::find_info_file()?;

        if let Some(path) = info_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load metadata from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read metadata file: {}", path.as_ref().display()))?;

        let info: AppInfo = toml::from_str(&content)
            .with_context(|| format!("Failed to parse metadata file: {}", path.as_ref().display()))?;

        info.validate()?;
        Ok(info)
    }

    /// Find the metadata file in order of precedence
    fn find_info_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_info = PathBuf::from("timestring.toml");
        if current_dir_info.exists() {
            return Ok(Some(current_dir_info));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_info = config_dir.join("timestring").join("app.toml");
            if xdg_info.exists() {
                return Ok(Some(xdg_info));
            }
        }

        Ok(None)
    }

    /// Validate metadata values
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            anyhow::bail!("name cannot be empty");
        }

        // Identifier must be reverse-DNS shaped: at least two non-empty
        // dot-separated segments
        let segments: Vec<&str> = self.identifier.split('.').collect();
        if segments.len() < 2 || segments.iter().any(|s| s.is_empty()) {
            anyhow::bail!(
                "identifier must be a dot-separated reverse-DNS name, got '{}'",
                self.identifier
            );
        }

        if self.version.is_empty() {
            anyhow::bail!("version cannot be empty");
        }
        if self.build.is_empty() {
            anyhow::bail!("build cannot be empty");
        }

        Ok(())
    }

    /// Internal application name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// User-facing name, falling back to the internal name when unset
    pub fn display_name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }

    /// Development language/region code
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Reverse-DNS application identifier
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Copyright notice with literal `\n` sequences expanded to newlines
    pub fn copyright(&self) -> String {
        self.copyright.replace("\\n", "\n")
    }

    /// Build number
    pub fn build(&self) -> &str {
        &self.build
    }

    /// Human-facing version string
    pub fn version(&self) -> &str {
        &self.version
    }
}
