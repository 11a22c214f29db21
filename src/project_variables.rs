use console::style;
use heck::ToKebabCase;
use indexmap::IndexMap;
use log::warn;
use regex::Regex;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::error::Result;

pub const NAME_MAX_LEN: usize = 32;
pub const DESCRIPTION_MAX_LEN: usize = 132;
pub const DEFAULT_VERSION: &str = "1.0.0";

pub const INVALID_NAME: &str = "A Chrome extension package name must have fewer than 32 characters.
See: https://developer.chrome.com/docs/extensions/mv3/manifest/name/";

pub const EMPTY_NAME: &str = "A Chrome extension package name needs at least one letter or digit.";

pub const INVALID_VERSION: &str = "A valid version has one to four dot-separated integers.
Examples: \"1\", \"1.0\", \"2.0.3\", \"3.4.7.219\"
See: https://developer.chrome.com/docs/extensions/mv3/manifest/version/";

pub const INVALID_DESCRIPTION: &str = "The description must be no more than 132 characters.
See: https://developer.chrome.com/docs/extensions/mv3/manifest/description/";

/// Answers the sequencer fills in, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Version,
    Author,
    Description,
    Language,
}

pub type Validator = fn(&str) -> Result<(), String>;

/// How a slot is asked
#[derive(Clone)]
pub enum VarInfo {
    Text {
        default: Option<String>,
        validator: Option<Validator>,
    },
    Select {
        choices: Vec<&'static str>,
        default: usize,
    },
}

#[derive(Clone)]
pub struct TemplateSlots {
    pub(crate) field: Field,
    pub(crate) prompt: String,
    pub(crate) var_info: VarInfo,
}

impl TemplateSlots {
    fn text(
        field: Field,
        prompt: &str,
        default: Option<String>,
        validator: Option<Validator>,
    ) -> Self {
        Self {
            field,
            prompt: format!("🤷 {}", style(prompt).bold()),
            var_info: VarInfo::Text { default, validator },
        }
    }

    pub fn validate(&self, value: &str) -> Result<(), String> {
        match &self.var_info {
            VarInfo::Text {
                validator: Some(validator),
                ..
            } => validator(value),
            VarInfo::Text { validator: None, .. } => Ok(()),
            VarInfo::Select { choices, .. } => {
                if choices.iter().any(|choice| *choice == value) {
                    Ok(())
                } else {
                    Err(format!("`{value}` is not one of {}", choices.join(", ")))
                }
            }
        }
    }
}

/// The fixed question table.
pub fn template_slots(default_author: Option<String>) -> Vec<TemplateSlots> {
    vec![
        TemplateSlots::text(
            Field::Name,
            "Chrome extension package name:",
            None,
            Some(validate_name),
        ),
        TemplateSlots::text(
            Field::Version,
            "First version number:",
            Some(DEFAULT_VERSION.to_string()),
            Some(validate_version),
        ),
        TemplateSlots::text(Field::Author, "Author name:", default_author, None),
        TemplateSlots::text(
            Field::Description,
            "Description:",
            None,
            Some(validate_description),
        ),
        TemplateSlots {
            field: Field::Language,
            prompt: format!("🤷 {}", style("Which do you want to use?").bold()),
            var_info: VarInfo::Select {
                choices: crate::template::Language::titles(),
                default: 0,
            },
        },
    ]
}

pub fn validate_name(name: &str) -> Result<(), String> {
    if name.chars().count() >= NAME_MAX_LEN {
        return Err(INVALID_NAME.to_string());
    }
    if slugify(name).is_empty() {
        return Err(EMPTY_NAME.to_string());
    }
    Ok(())
}

pub fn validate_version(version: &str) -> Result<(), String> {
    let valid_version = Regex::new(r"^[0-9]+(\.[0-9]+){0,3}$").map_err(|e| e.to_string())?;
    if valid_version.is_match(version) {
        Ok(())
    } else {
        Err(INVALID_VERSION.to_string())
    }
}

pub fn validate_description(description: &str) -> Result<(), String> {
    if description.chars().count() <= DESCRIPTION_MAX_LEN {
        Ok(())
    } else {
        Err(INVALID_DESCRIPTION.to_string())
    }
}

/// Lowercase, hyphen separated form of `name`, usable as directory and package name.
///
/// Accents are dropped first, so `Café` becomes `cafe`.
pub fn slugify(name: &str) -> String {
    let deburred: String = name.nfd().filter(|c| !is_combining_mark(*c)).collect();
    deburred.to_kebab_case()
}

/// Ask every slot in order, re-asking a slot as long as its answer is rejected.
pub fn fill_project_variables(
    slots: &[TemplateSlots],
    mut value_provider: impl FnMut(&TemplateSlots) -> Result<String>,
) -> Result<IndexMap<Field, String>> {
    let mut values = IndexMap::with_capacity(slots.len());
    for slot in slots {
        let value = loop {
            let value = value_provider(slot)?;
            match slot.validate(&value) {
                Ok(()) => break value,
                Err(msg) => warn!(
                    "{} \"{}\"\n{}",
                    style("Sorry,").bold().red(),
                    style(&value).bold().yellow(),
                    style(msg).red()
                ),
            }
        };
        values.insert(slot.field, value);
    }
    Ok(values)
}
