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

//! The `export` subcommand.

use std::{fs, path::PathBuf};

use clap::Parser;
use eyre::{Context as _, Result};

use super::helpers::{guess_format, load_config};
use crate::{
    export::{self, Format},
    success, warning,
};

/// The export command.
#[derive(Debug, Parser)]
pub struct Export {
    /// The configuration file to use instead of the discovered one.
    #[arg(long)]
    config: Option<PathBuf>,
    /// The output format, guessed from the output file when omitted.
    #[arg(long, short = 'F', value_enum)]
    format: Option<Format>,
    /// The file to write, `.cz-config.js` by default.
    #[arg(long, short = 'o', conflicts_with = "stdout")]
    output: Option<PathBuf>,
    /// Print the catalog instead of writing a file.
    #[arg(long)]
    stdout: bool,
}

impl super::Command for Export {
    fn run(&self) -> Result<()> {
        let catalog = load_config(self.config.as_deref())?.catalog();
        catalog.validate()?;

        let format = match (self.format, &self.output) {
            (Some(format), _) => format,
            (None, Some(output)) => guess_format(output)?,
            (None, None) => Format::Js,
        };

        let rendered = export::render(&catalog, format)?;

        if self.stdout {
            print!("{rendered}");
            return Ok(());
        }

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format.default_file_name()));

        if output.exists() {
            warning!("Overwriting {}.", output.display());
        }

        fs::write(&output, rendered).wrap_err_with(|| {
            format!("Failed to write {}", output.display())
        })?;

        success!(
            "{} commit types have been exported to {}.",
            catalog.len(),
            output.display()
        );

        Ok(())
    }
}
