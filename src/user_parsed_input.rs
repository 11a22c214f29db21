//! Answers from the user after validation

use indexmap::IndexMap;

use crate::project_variables::{slugify, Field};
use crate::template::Language;

/// Everything collected by the prompts, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserParsedInput {
    name: String,
    version: String,
    author: String,
    description: String,
    language: Language,
}

impl UserParsedInput {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
        language: Language,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            author: author.into(),
            description: description.into(),
            language,
        }
    }

    /// Build from the sequencer output; every field is expected to be validated already.
    pub fn from_values(mut values: IndexMap<Field, String>) -> Self {
        let mut take = |field: Field| values.swap_remove(&field).unwrap_or_default();
        let name = take(Field::Name);
        let version = take(Field::Version);
        let author = take(Field::Author);
        let description = take(Field::Description);
        let language = Language::from_title(&take(Field::Language)).unwrap_or_default();
        Self::new(name, version, author, description, language)
    }

    /// Name as typed, used as the extension display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slug of the name, used for the directory and the package name
    pub fn package_name(&self) -> String {
        slugify(&self.name)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn language(&self) -> Language {
        self.language
    }
}
