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

//! The catalog of commit types.
//!
//! The built-in catalog is a static table: it is never built at runtime and
//! never mutated, so it can be read from anywhere without coordination.
//! Catalogs read from a configuration or from an exported file are owned
//! [`Catalog`] values with the same shape.

use std::{borrow::Cow, slice, sync::LazyLock};

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A commit type, as presented in the selection list of a commit prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitType {
    /// The token written in the commit message, like `feat` or `fix`.
    pub value: Cow<'static, str>,
    /// The label displayed in the selection list.
    pub name: Cow<'static, str>,
}

/// An ordered list of commit types.
///
/// The order of the types is the display order in the selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// The commit types.
    pub types: Vec<CommitType>,
}

/// An authoring defect in a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A commit type has an empty value.
    #[error("The commit type at position {position} has an empty value")]
    EmptyValue {
        /// The position of the commit type in the catalog, starting at 1.
        position: usize,
    },
    /// A value is not a valid commit type token.
    #[error("The commit type `{value}` is not a valid token")]
    InvalidValue {
        /// The offending value.
        value: String,
    },
    /// A commit type has an empty name, or a name without description.
    #[error("The commit type `{value}` has an empty name")]
    EmptyName {
        /// The value of the commit type.
        value: String,
    },
    /// Two commit types share the same value.
    #[error("The commit type `{value}` is defined more than once")]
    DuplicateValue {
        /// The duplicated value.
        value: String,
    },
}

/// The built-in commit types.
pub static TYPES: [CommitType; 8] = [
    CommitType::new("feat", "feat:     Nova funcionalidade"),
    CommitType::new("fix", "fix:      Correção de bug"),
    CommitType::new("docs", "docs:     Documentação"),
    CommitType::new("style", "style:    Estilo (semântica, identação)"),
    CommitType::new("refactor", "refactor: Refatoração de código"),
    CommitType::new("perf", "perf:     Melhorias de performance"),
    CommitType::new("test", "test:     Testes"),
    CommitType::new("chore", "chore:    Outras mudanças (build, deps)"),
];

/// The vocabulary of commit type tokens.
// NOTE(unwrap): This regex is known to be valid.
#[allow(clippy::unwrap_used)]
static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_-]*$").unwrap());

/// Returns the built-in commit types, in display order.
pub fn types() -> &'static [CommitType] {
    &TYPES
}

impl CommitType {
    /// Builds a commit type from static strings.
    pub const fn new(value: &'static str, name: &'static str) -> Self {
        Self {
            value: Cow::Borrowed(value),
            name: Cow::Borrowed(name),
        }
    }

    /// Returns the description part of the name.
    ///
    /// Names are usually laid out as `<value>: <padding><description>`. When
    /// the name does not start with `<value>:`, it is returned as is.
    pub fn description(&self) -> &str {
        self.name
            .strip_prefix(self.value.as_ref())
            .and_then(|rest| rest.strip_prefix(':'))
            .map_or(self.name.as_ref(), str::trim_start)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            types: TYPES.to_vec(),
        }
    }
}

impl Catalog {
    /// Builds a catalog from an ordered list of values and descriptions.
    ///
    /// Names are laid out as `<value>:<padding> <description>`, where the
    /// padding aligns all descriptions on the longest value.
    pub fn from_descriptions(types: &IndexMap<String, String>) -> Self {
        let width = types
            .keys()
            .map(|value| value.chars().count())
            .max()
            .unwrap_or_default();

        let types = types
            .iter()
            .map(|(value, description)| {
                let padding =
                    " ".repeat(width.saturating_sub(value.chars().count()));

                CommitType {
                    value: Cow::Owned(value.clone()),
                    name: Cow::Owned(format!(
                        "{value}:{padding} {description}"
                    )),
                }
            })
            .collect();

        Self { types }
    }

    /// Returns an iterator over the commit types, in display order.
    pub fn iter(&self) -> slice::Iter<'_, CommitType> {
        self.types.iter()
    }

    /// Returns the number of commit types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns the commit type with the given value.
    pub fn get(&self, value: &str) -> Option<&CommitType> {
        self.types.iter().find(|ty| ty.value == value)
    }

    /// Returns the values of the commit types, in display order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|ty| ty.value.as_ref())
    }

    /// Checks the catalog for authoring defects.
    ///
    /// The commit types are checked in display order, and the first defect
    /// found is returned.
    #[tracing::instrument(level = "trace", skip_all, fields(len = self.len()))]
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (index, ty) in self.types.iter().enumerate() {
            if ty.value.is_empty() {
                return Err(CatalogError::EmptyValue {
                    position: index.saturating_add(1),
                });
            }

            if !TOKEN_REGEX.is_match(&ty.value) {
                return Err(CatalogError::InvalidValue {
                    value: ty.value.clone().into_owned(),
                });
            }

            if ty.name.trim().is_empty() || ty.description().is_empty() {
                return Err(CatalogError::EmptyName {
                    value: ty.value.clone().into_owned(),
                });
            }

            if self.types.iter().take(index).any(|seen| seen.value == ty.value)
            {
                return Err(CatalogError::DuplicateValue {
                    value: ty.value.clone().into_owned(),
                });
            }
        }

        tracing::debug!("the catalog is valid");
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CommitType;
    type IntoIter = slice::Iter<'a, CommitType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use indexmap::indexmap;

    use super::*;

    fn builtin_descriptions() -> IndexMap<String, String> {
        types()
            .iter()
            .map(|ty| (ty.value.to_string(), ty.description().to_owned()))
            .collect()
    }

    #[test]
    fn builtin_types_are_in_authoring_order() {
        let values: Vec<&str> =
            types().iter().map(|ty| ty.value.as_ref()).collect();

        assert_eq!(
            values,
            [
                "feat", "fix", "docs", "style", "refactor", "perf", "test",
                "chore"
            ]
        );
    }

    #[test]
    fn builtin_types_start_with_feat_and_end_with_chore() {
        let types = types();

        assert_eq!(types.len(), 8);
        assert_eq!(types.first().unwrap().value, "feat");
        assert_eq!(types.first().unwrap().name, "feat:     Nova funcionalidade");
        assert_eq!(types.last().unwrap().value, "chore");
        assert_eq!(
            types.last().unwrap().name,
            "chore:    Outras mudanças (build, deps)"
        );
    }

    #[test]
    fn builtin_values_are_unique_and_names_non_empty() {
        for (index, ty) in types().iter().enumerate() {
            assert!(!ty.value.is_empty());
            assert!(!ty.name.is_empty());
            assert!(
                types().iter().skip(index + 1).all(|other| other.value != ty.value),
                "{} is duplicated",
                ty.value
            );
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        assert_eq!(Catalog::default().validate(), Ok(()));
    }

    #[test]
    fn default_catalog_matches_the_builtin_types() {
        assert_eq!(Catalog::default().types, types());
    }

    #[test]
    fn description_strips_the_value_and_padding() {
        let ty = CommitType::new("fix", "fix:      Correção de bug");
        assert_eq!(ty.description(), "Correção de bug");
    }

    #[test]
    fn description_falls_back_to_the_whole_name() {
        let ty = CommitType::new("fix", "Fixes a bug");
        assert_eq!(ty.description(), "Fixes a bug");
    }

    #[test]
    fn from_descriptions_rebuilds_the_builtin_layout() {
        let catalog = Catalog::from_descriptions(&builtin_descriptions());
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn from_descriptions_pads_on_the_longest_value() {
        let catalog = Catalog::from_descriptions(&indexmap! {
            String::from("a") => String::from("first"),
            String::from("abc") => String::from("second"),
        });

        let names: Vec<&str> =
            catalog.iter().map(|ty| ty.name.as_ref()).collect();
        assert_eq!(names, ["a:   first", "abc: second"]);
    }

    #[test]
    fn from_descriptions_accepts_an_empty_list() {
        let catalog = Catalog::from_descriptions(&IndexMap::new());
        assert!(catalog.is_empty());
    }

    #[test]
    fn get_finds_a_type_by_value() {
        let catalog = Catalog::default();

        assert_eq!(
            catalog.get("perf").map(CommitType::description),
            Some("Melhorias de performance")
        );
        assert_eq!(catalog.get("wip"), None);
    }

    #[test]
    fn validate_reports_empty_values() {
        let catalog = Catalog {
            types: vec![
                CommitType::new("feat", "feat: Feature"),
                CommitType::new("", "Nothing"),
            ],
        };

        assert_eq!(
            catalog.validate(),
            Err(CatalogError::EmptyValue { position: 2 })
        );
    }

    #[test]
    fn validate_reports_invalid_tokens() {
        let catalog = Catalog {
            types: vec![CommitType::new("Feat", "Feat: Feature")],
        };

        assert_eq!(
            catalog.validate(),
            Err(CatalogError::InvalidValue {
                value: String::from("Feat")
            })
        );
    }

    #[test]
    fn validate_reports_empty_names() {
        let catalog = Catalog {
            types: vec![CommitType::new("feat", "  ")],
        };

        assert_eq!(
            catalog.validate(),
            Err(CatalogError::EmptyName {
                value: String::from("feat")
            })
        );
    }

    #[test]
    fn validate_reports_names_without_description() {
        let catalog = Catalog::from_descriptions(&indexmap! {
            String::from("feat") => String::new(),
        });

        assert_eq!(
            catalog.validate(),
            Err(CatalogError::EmptyName {
                value: String::from("feat")
            })
        );
    }

    #[test]
    fn validate_reports_duplicate_values() {
        let catalog = Catalog {
            types: vec![
                CommitType::new("fix", "fix: Bug fix"),
                CommitType::new("feat", "feat: Feature"),
                CommitType::new("fix", "fix: Another bug fix"),
            ],
        };

        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateValue {
                value: String::from("fix")
            })
        );
    }
}
