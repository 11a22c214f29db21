//! Template variants and the repositories they are cloned from

use std::fmt::Display;

pub const EXTENSION_MANIFEST: &str = "src/manifest.json";

/// Source language of the generated extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    JavaScript,
    TypeScript,
}

/// Where a variant comes from and which documents get rewritten after cloning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub url: String,
    /// Relative path of the extension manifest, if the template ships one
    pub extension_manifest: Option<String>,
}

impl Language {
    const ALL: [Self; 2] = [Self::JavaScript, Self::TypeScript];

    pub const fn title(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
        }
    }

    pub fn titles() -> Vec<&'static str> {
        Self::ALL.iter().map(|l| l.title()).collect()
    }

    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.title() == title)
    }

    pub const fn repo_url(self) -> &'static str {
        match self {
            Self::JavaScript => "https://github.com/extend-chrome/js-react-boilerplate.git",
            Self::TypeScript => "https://github.com/extend-chrome/ts-react-boilerplate.git",
        }
    }

    pub fn template(self) -> Template {
        Template {
            url: self.repo_url().to_string(),
            extension_manifest: Some(EXTENSION_MANIFEST.to_string()),
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
