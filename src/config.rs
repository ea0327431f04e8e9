use serde::Deserialize;
use std::collections::HashMap;

use crate::alphabet::Alphabet;
use crate::errors::AlphabetError;

/// A named table variant as written in `variants.toml`.
#[derive(Debug, Deserialize, Clone)]
pub struct VariantConfig {
    pub chars: String,
    #[serde(default)]
    pub case_insensitive: bool,
}

impl VariantConfig {
    /// Builds a validated alphabet from this variant definition.
    pub fn to_alphabet(&self) -> Result<Alphabet, AlphabetError> {
        Alphabet::from_str(&self.chars, self.case_insensitive)
    }
}

#[derive(Debug, Deserialize)]
pub struct VariantsConfig {
    pub variants: HashMap<String, VariantConfig>,
}

impl VariantsConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../variants.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load configuration with user overrides from standard locations
    /// 1. Start with built-in variants
    /// 2. Override with ~/.config/base-lut/variants.toml if it exists
    /// 3. Override with ./variants.toml if it exists in current directory
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        // Try to load user config from ~/.config/base-lut/variants.toml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("base-lut").join("variants.toml");
            if user_config_path.exists() {
                match Self::load_from_file(&user_config_path) {
                    Ok(user_config) => {
                        config.merge(user_config);
                    }
                    Err(e) => {
                        eprintln!(
                            "Warning: Failed to load user config from {:?}: {}",
                            user_config_path, e
                        );
                    }
                }
            }
        }

        // Try to load local config from ./variants.toml
        let local_config_path = std::path::Path::new("variants.toml");
        if local_config_path.exists() {
            match Self::load_from_file(local_config_path) {
                Ok(local_config) => {
                    config.merge(local_config);
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load local config from {:?}: {}",
                        local_config_path, e
                    );
                }
            }
        }

        Ok(config)
    }

    /// Merge another config into this one, overriding existing variants
    pub fn merge(&mut self, other: VariantsConfig) {
        for (name, variant) in other.variants {
            self.variants.insert(name, variant);
        }
    }

    pub fn get_variant(&self, name: &str) -> Option<&VariantConfig> {
        self.variants.get(name)
    }

    /// Returns all variant names, sorted
    pub fn variant_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.variants.keys().cloned().collect();
        names.sort();
        names
    }
}
