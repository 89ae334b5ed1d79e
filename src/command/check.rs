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

//! The `check` subcommand.

use std::{fs, path::PathBuf};

use clap::Parser;
use eyre::{Context as _, Result};

use super::helpers::{guess_format, load_config};
use crate::{export, success};

/// The check command.
#[derive(Debug, Parser)]
pub struct Check {
    /// The configuration file to use instead of the discovered one.
    #[arg(long, conflicts_with = "file")]
    config: Option<PathBuf>,
    /// An exported catalog to check instead of the configuration.
    file: Option<PathBuf>,
}

impl super::Command for Check {
    fn run(&self) -> Result<()> {
        let catalog = match &self.file {
            Some(file) => {
                let format = guess_format(file)?;
                let text = fs::read_to_string(file).wrap_err_with(|| {
                    format!("Failed to read {}", file.display())
                })?;
                export::parse(&text, format)?
            }
            None => load_config(self.config.as_deref())?.catalog(),
        };

        catalog.validate()?;

        success!("The catalog is valid: {} commit types.", catalog.len());
        Ok(())
    }
}
