// cz-catalog - Commit types for interactive commit prompts.
// Copyright (C) 2026 Jean-Philippe Cugnet <jean-philippe@cugnet.eu>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3 of the License.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Configuration for cz-catalog.
//!
//! A repository can override the built-in commit types with a
//! `cz-catalog.toml` at its root or in any parent directory.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    catalog::{types, Catalog},
    tracing::LogResult as _,
};

/// The cz-catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The version of the configuration.
    pub version: String,
    /// The commit types and their description, in display order.
    pub types: IndexMap<String, String>,
}

/// An error that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The current directory is not accessible.
    #[error("Failed to get the current directory")]
    CurrentDir(#[source] io::Error),
    /// The configuration file cannot be read.
    #[error("Failed to read {}", .path.display())]
    ReadError {
        /// The path of the configuration file.
        path: PathBuf,
        /// The I/O error.
        #[source]
        source: io::Error,
    },
    /// The configuration file is invalid.
    #[error("Invalid configuration in {}", .path.display())]
    InvalidConfig {
        /// The path of the configuration file.
        path: PathBuf,
        /// The parsing error.
        #[source]
        source: FromTomlError,
    },
}

/// An error that can occur when parsing the TOML.
#[derive(Debug, Error)]
pub enum FromTomlError {
    /// The configuration has been written for another version.
    #[error("Configuration version {0} is not supported")]
    UnsupportedVersion(String),
    /// The TOML is not a valid configuration.
    #[error("Failed to parse into a valid configuration")]
    ParseError(#[from] toml::de::Error),
}

/// A minimal configuration to get the version.
///
/// The configuration format is versioned, so that a file written for another
/// version is reported as such instead of as a parsing error.
#[derive(Debug, Deserialize)]
struct MinimalConfig {
    /// The version of the configuration.
    version: String,
}

/// The name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "cz-catalog.toml";
/// The current version of the configuration file.
pub const VERSION: &str = "0.1";

impl Default for Config {
    fn default() -> Self {
        Self {
            version: String::from(VERSION),
            types: types()
                .iter()
                .map(|ty| {
                    (
                        String::from(ty.value.as_ref()),
                        String::from(ty.description()),
                    )
                })
                .collect(),
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// When `path` is `None`, the configuration file is searched from the
    /// current directory upwards, and the built-in types are used if there is
    /// none.
    #[tracing::instrument(name = "load_config", level = "trace")]
    pub fn load(path: Option<&Path>) -> Result<Self, LoadError> {
        let path = match path {
            Some(path) => path.to_owned(),
            None => match config_file()? {
                Some(path) => path,
                None => {
                    tracing::debug!("no configuration file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!(?path, "loading the configuration");

        let toml = fs::read_to_string(&path)
            .map_err(|source| LoadError::ReadError {
                path: path.clone(),
                source,
            })
            .log_err()?;

        let config = Self::from_toml(&toml)
            .map_err(|source| LoadError::InvalidConfig { path, source })
            .log_err()?;

        tracing::debug!(?config);
        Ok(config)
    }

    /// Builds the configuration from its TOML representation.
    pub fn from_toml(toml: &str) -> Result<Self, FromTomlError> {
        let minimal_config: MinimalConfig = toml::from_str(toml)?;

        if minimal_config.version == VERSION {
            Ok(toml::from_str(toml)?)
        } else {
            Err(FromTomlError::UnsupportedVersion(minimal_config.version))
        }
    }

    /// Returns the catalog of commit types defined by the configuration.
    pub fn catalog(&self) -> Catalog {
        Catalog::from_descriptions(&self.types)
    }
}

/// Searches the configuration file from the current directory upwards.
pub fn config_file() -> Result<Option<PathBuf>, LoadError> {
    let current_dir = env::current_dir()
        .map_err(LoadError::CurrentDir)
        .log_err()?;

    Ok(find_config_file(&current_dir))
}

/// Searches the configuration file from `dir` upwards.
fn find_config_file(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use indoc::{formatdoc, indoc};

    use super::*;

    #[test]
    fn toml_representation_for_default() {
        let config = Config::default();

        assert_eq!(
            toml::to_string(&config).unwrap(),
            formatdoc! {r##"
                version = "{VERSION}"

                [types]
                feat = "Nova funcionalidade"
                fix = "Correção de bug"
                docs = "Documentação"
                style = "Estilo (semântica, identação)"
                refactor = "Refatoração de código"
                perf = "Melhorias de performance"
                test = "Testes"
                chore = "Outras mudanças (build, deps)"
            "##}
        );
    }

    #[test]
    fn default_config_yields_the_builtin_catalog() {
        assert_eq!(Config::default().catalog(), Catalog::default());
    }

    #[test]
    fn from_toml_keeps_the_order_of_the_types() {
        let config = Config::from_toml(indoc! {r#"
            version = "0.1"

            [types]
            zzz = "last in the alphabet"
            aaa = "first in the alphabet"
        "#})
        .unwrap();

        let catalog = config.catalog();
        let values: Vec<&str> = catalog.values().collect();
        assert_eq!(values, ["zzz", "aaa"]);
    }

    #[test]
    fn from_toml_rejects_unsupported_versions() {
        let result = Config::from_toml(indoc! {r#"
            version = "0.0"

            [types]
            feat = "a feature"
        "#});

        assert!(matches!(
            result,
            Err(FromTomlError::UnsupportedVersion(version)) if version == "0.0"
        ));
    }

    #[test]
    fn from_toml_requires_a_version() {
        let result = Config::from_toml(indoc! {r#"
            [types]
            feat = "a feature"
        "#});

        assert!(matches!(result, Err(FromTomlError::ParseError(_))));
    }

    #[test]
    fn from_toml_requires_types() {
        let result = Config::from_toml(r#"version = "0.1""#);
        assert!(matches!(result, Err(FromTomlError::ParseError(_))));
    }

    #[test]
    fn find_config_file_searches_parent_directories() {
        let temp_dir = assert_fs::TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "").unwrap();

        assert_eq!(
            find_config_file(&nested),
            Some(temp_dir.path().join(CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn load_reports_missing_explicit_files() {
        let temp_dir = assert_fs::TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);

        assert!(matches!(
            Config::load(Some(&path)),
            Err(LoadError::ReadError { .. })
        ));
    }
}
