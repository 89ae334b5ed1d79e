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

//! Commit types for interactive commit prompts.
//!
//! The [built-in catalog](catalog::types) lists the conventional commit types
//! offered when writing a commit message, each with the label displayed in the
//! selection list of the commit prompt. A repository can replace it through a
//! [configuration](config) file, and the catalog can be [exported](export) in
//! the shape commit prompt tools read.

pub mod catalog;
pub mod config;
pub mod export;

mod command;
mod tracing;

pub use catalog::{types, Catalog, CatalogError, CommitType};
pub use command::CzCatalog;
