use crate::helpers::prelude::*;

use crx_init::manifest::STRIPPED_KEYS;
use crx_init::{generate, Error, Language, Template, UserParsedInput};
use serde_json::Value;

fn answers() -> UserParsedInput {
    UserParsedInput::new("My Cool Ext", "1.0.0", "A", "D", Language::JavaScript)
}

fn local_template(project: &crate::helpers::project::Project) -> Template {
    Template {
        url: project.url(),
        ..Language::JavaScript.template()
    }
}

#[test]
fn it_creates_the_project_in_a_slug_named_directory() {
    let template = create_template();
    let dir = tempdir().build();

    let generated = generate(&answers(), &local_template(&template), dir.path()).unwrap();

    assert_eq!(generated, dir.target_path("my-cool-ext"));
    assert!(dir.exists("my-cool-ext/README.md"));
}

#[test]
fn it_rewrites_the_package_descriptor() {
    let template = create_template();
    let dir = tempdir().build();

    generate(&answers(), &local_template(&template), dir.path()).unwrap();

    let package: Value = serde_json::from_str(&dir.read("my-cool-ext/package.json")).unwrap();
    assert_eq!(package["name"], "my-cool-ext");
    assert_eq!(package["version"], "1.0.0");
    assert_eq!(package["author"], "A");
    assert_eq!(package["description"], "D");
    assert_eq!(
        package["scripts"],
        serde_json::json!({"start": "run-p start:*", "build": "rollup -c"})
    );
    for key in STRIPPED_KEYS {
        assert!(package.get(key).is_none(), "{key} should be stripped");
    }

    let keys: Vec<_> = package.as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        keys,
        ["name", "version", "description", "author", "scripts", "dependencies"]
    );
    assert!(dir
        .read("my-cool-ext/package.json")
        .contains("\"dependencies\": {\n    \"react\": \"^17.0.1\",\n    \"react-dom\""));
}

#[test]
fn it_sets_the_raw_name_in_the_extension_manifest() {
    let template = create_template();
    let dir = tempdir().build();

    generate(&answers(), &local_template(&template), dir.path()).unwrap();

    let before = template.read("src/manifest.json");
    let after = dir.read("my-cool-ext/src/manifest.json");
    assert_eq!(
        after,
        before.replace("\"JS React Boilerplate\"", "\"My Cool Ext\"")
    );
}

#[test]
fn it_removes_git_history() {
    let template = create_template();
    let dir = tempdir().build();

    generate(&answers(), &local_template(&template), dir.path()).unwrap();

    assert!(!dir.exists("my-cool-ext/.git"));
    assert!(template.exists(".git"));
}

#[test]
fn it_leaves_the_manifest_alone_when_the_template_has_none() {
    let template = tempdir()
        .with_default_manifests()
        .without("src/manifest.json")
        .init_git()
        .build();
    let dir = tempdir().build();
    let template = Template {
        url: template.url(),
        extension_manifest: None,
    };

    generate(&answers(), &template, dir.path()).unwrap();

    assert!(dir.read("my-cool-ext/package.json").contains("my-cool-ext"));
    assert!(!dir.exists("my-cool-ext/src/manifest.json"));
}

#[test]
fn clone_failure_stops_before_any_rewrite() {
    let dir = tempdir().build();
    let template = Template {
        url: dir.target_path("no-such-template").display().to_string(),
        ..Language::JavaScript.template()
    };

    let err = generate(&answers(), &template, dir.path()).unwrap_err();

    assert!(matches!(err, Error::Fetch { .. }), "{err:?}");
    assert!(!dir.exists("my-cool-ext/package.json"));
}

#[test]
fn existing_target_directory_is_not_touched() {
    let template = create_template();
    let dir = tempdir().file("my-cool-ext/keep.txt", "mine").build();

    let err = generate(&answers(), &local_template(&template), dir.path()).unwrap_err();

    assert!(matches!(err, Error::TargetExists(_)), "{err:?}");
    assert_eq!(dir.read("my-cool-ext/keep.txt"), "mine");
    assert!(!dir.exists("my-cool-ext/package.json"));
}

#[test]
fn missing_extension_manifest_aborts_before_cleanup() {
    let template = tempdir()
        .with_default_manifests()
        .without("src/manifest.json")
        .init_git()
        .build();
    let dir = tempdir().build();

    let err = generate(&answers(), &local_template(&template), dir.path()).unwrap_err();

    assert!(matches!(err, Error::MissingDocument(_)), "{err:?}");
    assert!(dir.read("my-cool-ext/package.json").contains("my-cool-ext"));
    assert!(dir.exists("my-cool-ext/.git"));
}

#[test]
fn malformed_package_descriptor_is_reported() {
    let template = tempdir()
        .with_default_manifests()
        .file("package.json", "{ not json")
        .init_git()
        .build();
    let dir = tempdir().build();

    let err = generate(&answers(), &local_template(&template), dir.path()).unwrap_err();

    assert!(matches!(err, Error::Parse { .. }), "{err:?}");
    assert!(predicate::str::contains("package.json").eval(&err.to_string()));
}
