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

//! The `init` subcommand.

use std::{fs, path::PathBuf};

use askama::Template;
use clap::Parser;
use eyre::{bail, Result};
use thiserror::Error;

use crate::{
    config::{self, CONFIG_FILE_NAME, VERSION},
    hint, success,
};

/// The init command.
#[derive(Debug, Parser)]
pub struct Init {
    /// Force the init process.
    #[arg(long, short = 'f')]
    force: bool,
}

/// Usage errors of `cz-catalog init`.
#[derive(Debug, Error)]
pub enum InitError {
    /// A configuration already exists.
    #[error("There is already a cz-catalog.toml in the current directory")]
    ExistingConfig,
}

/// Parameters to generate a `cz-catalog.toml`.
#[derive(Debug, Template)]
#[template(path = "cz-catalog.toml.jinja", escape = "none")]
struct ConfigFile {
    /// The version of the configuration.
    version: &'static str,
    /// The commit types.
    types: Vec<TypeEntry>,
}

/// A commit type, as a TOML key and value.
#[derive(Debug)]
struct TypeEntry {
    /// The commit type, as a bare key.
    value: String,
    /// The description, as a TOML string.
    description: String,
}

impl super::Command for Init {
    fn run(&self) -> Result<()> {
        let config_file = PathBuf::from(CONFIG_FILE_NAME);

        if !self.force && config_file.exists() {
            bail!(InitError::ExistingConfig);
        }

        fs::write(&config_file, format!("{}\n", ConfigFile::default()))?;
        tracing::debug!(?config_file, "configuration written");

        success!("A {CONFIG_FILE_NAME} has been created!");
        hint!("You can now edit it to adjust the commit types.");

        Ok(())
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        let types = config::Config::default()
            .types
            .into_iter()
            .map(|(value, description)| TypeEntry {
                value,
                description: toml::Value::String(description).to_string(),
            })
            .collect();

        Self {
            version: VERSION,
            types,
        }
    }
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use super::*;
    use crate::config::Config;

    #[test]
    fn generated_config_loads_as_the_default() {
        let toml = ConfigFile::default().render().unwrap();
        assert_eq!(Config::from_toml(&toml).unwrap(), Config::default());
    }

    #[test]
    fn generated_config_lists_one_type_per_line() {
        let toml = ConfigFile::default().render().unwrap();

        assert!(toml.contains("\n[types]\nfeat = \"Nova funcionalidade\"\n"));
        assert!(toml.contains("\nchore = \"Outras mudanças (build, deps)\""));
    }
}
