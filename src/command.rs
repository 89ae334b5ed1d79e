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

//! The `cz-catalog` command line.

mod check;
mod export;
pub mod helpers;
mod init;
mod list;

use std::{error::Error as _, process};

use clap::Parser;
use eyre::Result;

use self::{
    check::Check,
    export::Export,
    helpers::UnknownFormat,
    init::{Init, InitError},
    list::List,
};
use crate::{
    catalog::CatalogError, config::LoadError, error, export::ExportError,
    hint,
};

/// Commit types for interactive commit prompts.
#[derive(Debug, Parser)]
#[command(author, version)]
pub enum CzCatalog {
    /// Writes a cz-catalog.toml with the built-in commit types.
    Init(Init),
    /// Lists the commit types.
    List(List),
    /// Exports the commit types for a commit prompt.
    Export(Export),
    /// Checks the commit types for authoring defects.
    Check(Check),
}

trait Command {
    /// Runs the command.
    fn run(&self) -> Result<()>;
}

impl CzCatalog {
    /// Runs cz-catalog.
    pub fn run() -> Result<()> {
        let command = Self::parse();
        crate::tracing::init();

        let result = match command {
            Self::Init(init) => init.run(),
            Self::List(list) => list.run(),
            Self::Export(export) => export.run(),
            Self::Check(check) => check.run(),
        };

        match result {
            Err(e) => handle_errors(e),
            Ok(()) => Ok(()),
        }
    }
}

fn handle_errors(e: color_eyre::Report) -> Result<()> {
    if let Some(e) = e.downcast_ref::<InitError>() {
        match e {
            InitError::ExistingConfig => {
                error!("{e}");
                hint!("You can force the command by running `cz-catalog init -f`.");
            }
        }
        process::exit(exitcode::CANTCREAT);
    } else if let Some(e) = e.downcast_ref::<CatalogError>() {
        error!("{e}");
        hint!("Each commit type needs a unique lowercase value and a name.");
        process::exit(exitcode::DATAERR);
    } else if let Some(e) = e.downcast_ref::<LoadError>() {
        error!("{e}");
        let mut source = e.source();
        while let Some(cause) = source {
            hint!("Caused by: {cause}");
            source = cause.source();
        }
        process::exit(exitcode::CONFIG);
    } else if let Some(e @ ExportError::NotParseable(_)) =
        e.downcast_ref::<ExportError>()
    {
        error!("{e}");
        hint!("`cz-catalog check` reads exported .json or .toml files only.");
        process::exit(exitcode::USAGE);
    } else if let Some(e) = e.downcast_ref::<UnknownFormat>() {
        error!("{e}");
        hint!("Use a .js, .json or .toml file, or pass `--format`.");
        process::exit(exitcode::USAGE);
    } else {
        Err(e)
    }
}
