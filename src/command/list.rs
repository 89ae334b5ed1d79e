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

//! The `list` subcommand.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize as _;
use eyre::Result;

use super::helpers::load_config;

/// The list command.
#[derive(Debug, Parser)]
pub struct List {
    /// The configuration file to use instead of the discovered one.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl super::Command for List {
    fn run(&self) -> Result<()> {
        let catalog = load_config(self.config.as_deref())?.catalog();

        let width = catalog
            .values()
            .map(|value| value.chars().count())
            .max()
            .unwrap_or_default();

        for ty in &catalog {
            let padding =
                " ".repeat(width.saturating_sub(ty.value.chars().count()));
            println!("{}{padding}  {}", ty.value.bold(), ty.description());
        }

        Ok(())
    }
}
