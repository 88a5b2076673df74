//! Query shaper: filtering, search, ordering composition.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use catwalk_api::query::{shape, ShapeParams};
use catwalk_core::model::Cat;

fn cat(id: u64, name: &str, color: &str, birth_year: i32, owner: &str, tags: &[&str]) -> Cat {
    Cat {
        id,
        name: name.into(),
        color: color.into(),
        birth_year,
        owner: owner.into(),
        achievements: tags.iter().map(|s| s.to_string()).collect(),
    }
}

fn herd() -> Vec<Cat> {
    vec![
        cat(1, "Tommy", "black", 2020, "alice", &["mouser"]),
        cat(2, "Atomic", "white", 2018, "bob", &[]),
        cat(3, "Murka", "black", 2019, "bob", &["tomcat slayer"]),
        cat(4, "Barsik", "ginger", 2021, "tomas", &[]),
    ]
}

fn names(cats: &[Cat]) -> Vec<&str> {
    cats.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn no_params_returns_all_in_default_order() {
    let shaped = shape(&ShapeParams::default(), herd());
    // Default order: birth_year ascending.
    assert_eq!(names(&shaped), ["Atomic", "Murka", "Tommy", "Barsik"]);
}

#[test]
fn color_filter_is_exact() {
    let params = ShapeParams {
        color: Some("black".into()),
        ..Default::default()
    };
    let shaped = shape(&params, herd());
    assert_eq!(names(&shaped), ["Murka", "Tommy"]);
    assert!(shaped.iter().all(|c| c.color == "black"));
}

#[test]
fn unknown_filter_value_yields_empty_not_error() {
    let params = ShapeParams {
        color: Some("chartreuse".into()),
        ..Default::default()
    };
    assert!(shape(&params, herd()).is_empty());
}

#[test]
fn birth_year_filter_composes_with_color() {
    let params = ShapeParams {
        color: Some("black".into()),
        birth_year: Some(2019),
        ..Default::default()
    };
    assert_eq!(names(&shape(&params, herd())), ["Murka"]);
}

#[test]
fn search_is_prefix_on_name_only() {
    let params = ShapeParams {
        search: Some("Tom".into()),
        ..Default::default()
    };
    let shaped = shape(&params, herd());
    // "Tommy" by name prefix; "Murka" via achievement substring "tomcat
    // slayer"; "Barsik" via owner substring "tomas". "Atomic" does NOT match:
    // name matching is prefix-only.
    assert_eq!(names(&shaped), ["Murka", "Tommy", "Barsik"]);
    assert!(!shaped.iter().any(|c| c.name == "Atomic"));
}

#[test]
fn search_matching_nothing_yields_empty() {
    let params = ShapeParams {
        search: Some("zzz".into()),
        ..Default::default()
    };
    assert!(shape(&params, herd()).is_empty());
}

#[test]
fn ordering_by_name_and_descending_marker() {
    let by_name = ShapeParams {
        ordering: Some("name".into()),
        ..Default::default()
    };
    assert_eq!(
        names(&shape(&by_name, herd())),
        ["Atomic", "Barsik", "Murka", "Tommy"]
    );

    let by_year_desc = ShapeParams {
        ordering: Some("-birth_year".into()),
        ..Default::default()
    };
    assert_eq!(
        names(&shape(&by_year_desc, herd())),
        ["Barsik", "Tommy", "Murka", "Atomic"]
    );
}

#[test]
fn unknown_ordering_field_falls_back_to_default() {
    let params = ShapeParams {
        ordering: Some("tail_length".into()),
        ..Default::default()
    };
    assert_eq!(
        names(&shape(&params, herd())),
        ["Atomic", "Murka", "Tommy", "Barsik"]
    );
}

#[test]
fn filters_search_and_ordering_compose() {
    let params = ShapeParams {
        color: Some("black".into()),
        search: Some("tom".into()),
        ordering: Some("-name".into()),
        ..Default::default()
    };
    // black cats matching "tom" (Tommy by prefix, Murka by achievement),
    // descending by name.
    assert_eq!(names(&shape(&params, herd())), ["Tommy", "Murka"]);
}

#[test]
fn shaping_is_idempotent_under_unchanged_state() {
    let params = ShapeParams {
        search: Some("Tom".into()),
        ordering: Some("name".into()),
        ..Default::default()
    };
    let first = shape(&params, herd());
    let second = shape(&params, herd());
    assert_eq!(names(&first), names(&second));
}
