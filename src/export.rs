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

//! Exports of the catalog for commit prompt tools.
//!
//! Commit prompts read their list of types from a file shaped like
//! `{ types: [{ value, name }, ...] }`. This module renders a [`Catalog`] in
//! that shape, either as a CommonJS module or as plain data, and reads the
//! plain data formats back.

use std::{ffi::OsStr, fmt, path::Path};

use askama::Template;
use thiserror::Error;

use crate::catalog::Catalog;

/// An output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// A CommonJS module, like `.cz-config.js`.
    Js,
    /// A JSON document.
    Json,
    /// A TOML document.
    Toml,
}

/// An error that can occur when exporting or reading a catalog.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The JavaScript template failed to render.
    #[error("Failed to render the JavaScript module")]
    Template(#[from] askama::Error),
    /// The catalog cannot be converted from or to JSON.
    #[error("Invalid JSON catalog")]
    Json(#[from] serde_json::Error),
    /// The catalog cannot be converted to TOML.
    #[error("Failed to serialise the catalog to TOML")]
    TomlSerialise(#[from] toml::ser::Error),
    /// The catalog cannot be read from TOML.
    #[error("Invalid TOML catalog")]
    TomlParse(#[from] toml::de::Error),
    /// The format can only be written.
    #[error("{0} catalogs cannot be read back")]
    NotParseable(Format),
}

/// A CommonJS module exporting the catalog.
#[derive(Debug, Template)]
#[template(path = "cz-config.js.jinja", escape = "none")]
struct JsModule {
    /// The entries of the `types` array.
    entries: Vec<JsEntry>,
}

/// An entry of the `types` array, with its fields as JavaScript literals.
#[derive(Debug)]
struct JsEntry {
    /// The value literal.
    value: String,
    /// The padding aligning the names.
    padding: String,
    /// The name literal.
    name: String,
}

impl Format {
    /// Guesses the format from the extension of a file.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(OsStr::to_str)? {
            "js" | "cjs" => Some(Self::Js),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Returns the file name used when no output is given.
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Js => ".cz-config.js",
            Self::Json => "cz-types.json",
            Self::Toml => "cz-types.toml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Js => write!(f, "JavaScript"),
            Self::Json => write!(f, "JSON"),
            Self::Toml => write!(f, "TOML"),
        }
    }
}

impl JsModule {
    /// Prepares the module for a catalog.
    fn new(catalog: &Catalog) -> Result<Self, ExportError> {
        let width = catalog
            .values()
            .map(|value| value.chars().count())
            .max()
            .unwrap_or_default();

        let entries = catalog
            .iter()
            .map(|ty| -> Result<JsEntry, ExportError> {
                Ok(JsEntry {
                    value: serde_json::to_string(&ty.value)?,
                    padding: " ".repeat(
                        width.saturating_sub(ty.value.chars().count()),
                    ),
                    name: serde_json::to_string(&ty.name)?,
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { entries })
    }
}

/// Renders the catalog in the given format.
///
/// The output always ends with a newline.
#[tracing::instrument(level = "trace", skip(catalog))]
pub fn render(catalog: &Catalog, format: Format) -> Result<String, ExportError> {
    let mut rendered = match format {
        Format::Js => JsModule::new(catalog)?.render()?,
        Format::Json => serde_json::to_string_pretty(catalog)?,
        Format::Toml => toml::to_string(catalog)?,
    };

    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    tracing::debug!(len = rendered.len(), "catalog rendered");
    Ok(rendered)
}

/// Reads a catalog rendered in the given format.
pub fn parse(text: &str, format: Format) -> Result<Catalog, ExportError> {
    match format {
        Format::Js => Err(ExportError::NotParseable(format)),
        Format::Json => Ok(serde_json::from_str(text)?),
        Format::Toml => Ok(toml::from_str(text)?),
    }
}
