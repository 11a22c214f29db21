use std::path::Path;

use log::debug;
use serde_json::{Map, Value};

use super::{locate_document, read_json_object, write_json_object};
use crate::error::Result;
use crate::user_parsed_input::UserParsedInput;

pub const PACKAGE_JSON: &str = "package.json";

/// Fields that only make sense for the boilerplate itself.
pub const STRIPPED_KEYS: [&str; 5] = ["bugs", "homepage", "keywords", "license", "repository"];

// Order used by sort-package-json.
const FIELD_ORDER: &[&str] = &[
    "$schema",
    "name",
    "displayName",
    "version",
    "private",
    "description",
    "categories",
    "keywords",
    "homepage",
    "bugs",
    "repository",
    "funding",
    "license",
    "qna",
    "author",
    "maintainers",
    "contributors",
    "publisher",
    "sideEffects",
    "type",
    "imports",
    "exports",
    "main",
    "svelte",
    "umd:main",
    "jsdelivr",
    "unpkg",
    "module",
    "source",
    "jsnext:main",
    "browser",
    "react-native",
    "types",
    "typesVersions",
    "typings",
    "style",
    "example",
    "examplestyle",
    "assets",
    "bin",
    "man",
    "directories",
    "files",
    "workspaces",
    "binary",
    "scripts",
    "betterScripts",
    "contributes",
    "activationEvents",
    "husky",
    "simple-git-hooks",
    "pre-commit",
    "commitlint",
    "lint-staged",
    "config",
    "nodemonConfig",
    "browserify",
    "babel",
    "browserslist",
    "xo",
    "prettier",
    "eslintConfig",
    "eslintIgnore",
    "npmpackagejsonlint",
    "release",
    "remarkConfig",
    "stylelint",
    "ava",
    "jest",
    "mocha",
    "nyc",
    "c8",
    "tap",
    "resolutions",
    "dependencies",
    "devDependencies",
    "dependenciesMeta",
    "peerDependencies",
    "peerDependenciesMeta",
    "optionalDependencies",
    "bundledDependencies",
    "bundleDependencies",
    "extensionPack",
    "extensionDependencies",
    "flat",
    "packageManager",
    "engines",
    "engineStrict",
    "volta",
    "languageName",
    "os",
    "cpu",
    "preferGlobal",
    "publishConfig",
    "icon",
    "badges",
    "galleryBanner",
    "preview",
    "markdown",
];

// Maps whose own keys are sorted alphabetically.
const SORTED_MAPS: &[&str] = &[
    "dependencies",
    "devDependencies",
    "peerDependencies",
    "optionalDependencies",
    "resolutions",
    "engines",
];

/// Merge the answers into `<project>/package.json`.
pub fn rewrite_package_json(project_dir: &Path, input: &UserParsedInput) -> Result<()> {
    let path = locate_document(project_dir, PACKAGE_JSON)?;
    let package = read_json_object(&path)?;
    debug!("rewriting {}", path.display());
    write_json_object(&path, merge_answers(package, input))
}

fn merge_answers(package: Map<String, Value>, input: &UserParsedInput) -> Map<String, Value> {
    let mut package: Map<String, Value> = package
        .into_iter()
        .filter(|(key, _)| !STRIPPED_KEYS.contains(&key.as_str()))
        .collect();
    package.insert("author".into(), input.author().into());
    package.insert("description".into(), input.description().into());
    package.insert("name".into(), input.package_name().into());
    package.insert("version".into(), input.version().into());
    sort_package_json(package)
}

/// Canonical key order: known fields first, then the others alphabetically,
/// then `_`-prefixed private fields alphabetically.
pub fn sort_package_json(package: Map<String, Value>) -> Map<String, Value> {
    let mut entries: Vec<(String, Value)> = package.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| sort_key(a).cmp(&sort_key(b)));
    entries
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Object(map) if SORTED_MAPS.contains(&key.as_str()) => {
                    Value::Object(sort_alphabetically(map))
                }
                other => other,
            };
            (key, value)
        })
        .collect()
}

fn sort_key(key: &str) -> (usize, usize, &str) {
    match FIELD_ORDER.iter().position(|known| *known == key) {
        Some(index) => (0, index, key),
        None if key.starts_with('_') => (2, 0, key),
        None => (1, 0, key),
    }
}

fn sort_alphabetically(map: Map<String, Value>) -> Map<String, Value> {
    let mut entries: Vec<(String, Value)> = map.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries.into_iter().collect()
}
