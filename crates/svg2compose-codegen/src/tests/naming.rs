use crate::naming::{camel_case, pascal_case, snake_case};
use crate::*;
use std::path::Path;

#[test]
fn dotted_names_split_into_namespace_and_name() {
    let names = NameResolver::new().resolve_str("navigation.home");
    assert_eq!(names.categories, vec!["navigation", "home"]);
    assert_eq!(names.namespace_part(), "navigation");
    assert_eq!(names.name_part(), "home");
    assert_eq!(names.full_path(), "navigation.home");
    assert_eq!(names.namespace_part_pascal(), "Navigation");
    assert_eq!(names.name_part_pascal(), "Home");
    assert_eq!(names.full_path_pascal(), "Navigation.Home");
    assert_eq!(names.full_path_camel(), "navigation.Home");
}

#[test]
fn deeper_namespaces_keep_their_dots() {
    let names = NameResolver::new().resolve_str("ui.buttons.primary_action");
    assert_eq!(names.namespace_part(), "ui.buttons");
    assert_eq!(names.namespace_part_pascal(), "Ui.Buttons");
    assert_eq!(names.namespace_part_camel(), "ui.Buttons");
    assert_eq!(names.name_part_pascal(), "PrimaryAction");
    assert_eq!(names.name_part_camel(), "primaryAction");
}

#[test]
fn single_category_has_no_namespace() {
    let names = NameResolver::new().resolve_str("button");
    assert_eq!(names.namespace_part(), "");
    assert_eq!(names.namespace_part_pascal(), "");
    assert_eq!(names.name_part_pascal(), "Button");
}

#[test]
fn file_stem_is_used_without_a_user_name() {
    let resolver = NameResolver::new();
    let names = resolver.resolve(Path::new("icons/arrow-left.svg"), None);
    assert_eq!(names.raw_name, "arrow_left");
    assert_eq!(names.name_part_pascal(), "ArrowLeft");
    assert_eq!(names.name_part_camel(), "arrowLeft");

    let names = resolver.resolve(Path::new("icons/arrow-left.svg"), Some("nav.back"));
    assert_eq!(names.name_part_pascal(), "Back");
    assert_eq!(names.namespace_part_pascal(), "Nav");

    let names = resolver.resolve(Path::new("icons/my icon.svg"), Some("  "));
    assert_eq!(names.name_part_pascal(), "MyIcon");
}

#[test]
fn identifiers_are_cleaned() {
    let names = NameResolver::new().resolve_str("my icon!!.--");
    assert_eq!(names.categories, vec!["my_icon"]);
    let names = NameResolver::new().resolve_str("...");
    assert!(names.categories.is_empty());
    assert_eq!(names.name, "UnnamedIcon");
}

#[test]
fn custom_separator() {
    let names = NameResolver::new()
        .with_separator('/')
        .resolve_str("social/share");
    assert_eq!(names.namespace_part(), "social");
    assert_eq!(names.name_part(), "share");
}

#[test]
fn case_conversions_split_camel_humps() {
    assert_eq!(pascal_case("homeIcon"), "HomeIcon");
    assert_eq!(pascal_case("close-button"), "CloseButton");
    assert_eq!(pascal_case("SVG_logo"), "SvgLogo");
    assert_eq!(camel_case("close-button"), "closeButton");
    assert_eq!(snake_case("HomeIcon"), "home_icon");
    assert_eq!(snake_case("arrow-left 2"), "arrow_left_2");
    assert_eq!(pascal_case(""), "");
}
