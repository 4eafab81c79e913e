//! The naming contract seen through the public API.

use scenic_core::prelude::*;

fn names(base: &str) -> ComponentNameSet {
    NameDeriver::derive(&BaseName::parse(base).unwrap())
}

#[test]
fn file_names_follow_the_contract() {
    for base in ["Login", "UserProfile", "Cart2", "_Hidden", "$Dollar"] {
        let set = names(base);
        let files: Vec<String> = TEMPLATES.iter().map(|t| t.file_name(&set)).collect();
        assert_eq!(
            files,
            [
                format!("{base}Activity.java"),
                format!("{base}Fragment.java"),
                format!("{base}Presenter.java"),
                format!("{base}VM.java"),
                format!("{base}View.java"),
            ]
        );
        assert_eq!(set.directory(), base.to_lowercase());
    }
}

#[test]
fn rendering_is_deterministic_across_calls() {
    let set = names("Login");
    for template in &TEMPLATES {
        assert_eq!(template.render(&set), template.render(&names("Login")));
    }
}

#[test]
fn invalid_names_are_rejected_before_derivation() {
    for bad in ["", "a/b", "a\\b", "two words", "9lives", "dash-name"] {
        assert!(BaseName::parse(bad).is_err(), "{bad:?} should be rejected");
    }
}
