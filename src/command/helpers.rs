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

//! Helpers for writing CLIs.

use std::path::{Path, PathBuf};

use eyre::Result;
use thiserror::Error;

use crate::{config::Config, export::Format};

/// The format of a file cannot be guessed from its name.
#[derive(Debug, Error)]
#[error("Cannot guess the format of {}", .0.display())]
pub struct UnknownFormat(PathBuf);

/// Loads the configuration, from `path` if given.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    Ok(Config::load(path)?)
}

/// Guesses the format of a file from its extension.
pub fn guess_format(path: &Path) -> Result<Format, UnknownFormat> {
    Format::from_path(path).ok_or_else(|| UnknownFormat(path.to_owned()))
}

/// Uncapitalises the first character in s.
pub fn uncapitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Prints a success.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        let message = format!($($arg)*).green().bold();
        println!("{message}");
    }};
}

/// Prints a warning.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        let message = format!($($arg)*).yellow().bold();
        eprintln!("{message}");
    }};
}

/// Prints an error.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        let message = format!($($arg)*);
        let message = $crate::command::helpers::uncapitalise(&message);
        let message = format!("Error: {message}").red().bold();
        eprintln!("{message}");
    }};
}

/// Prints a hint.
#[macro_export]
macro_rules! hint {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        let message = format!($($arg)*).blue();
        eprintln!("{message}");
    }};
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use super::*;

    #[test]
    fn uncapitalise_lowers_the_first_character_only() {
        assert_eq!(uncapitalise("Failed to read X"), "failed to read X");
        assert_eq!(uncapitalise("Écrit"), "écrit");
        assert_eq!(uncapitalise(""), "");
    }

    #[test]
    fn guess_format_reports_unknown_extensions() {
        let error = guess_format(Path::new("types.yaml")).unwrap_err();
        assert_eq!(error.to_string(), "Cannot guess the format of types.yaml");
    }
}
