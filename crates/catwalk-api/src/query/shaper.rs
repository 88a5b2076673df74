//! Query shaper: computes the exact member set and order of a collection
//! response.
//!
//! Pipeline order: equality filters, then search, then ordering. Each step
//! narrows or orders the output of the previous one; an unset parameter
//! imposes no constraint, and a filter matching nothing yields an empty
//! sequence rather than an error. No pagination; the full shaped sequence
//! is returned.

use catwalk_core::model::Cat;
use serde::Deserialize;

/// Query parameters a collection request may carry. Unknown parameters are
/// ignored at the transport edge.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShapeParams {
    pub color: Option<String>,
    pub birth_year: Option<i32>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderField {
    Name,
    BirthYear,
}

/// Parse the ordering parameter: `name` / `birth_year`, `-` prefix for
/// descending. Unknown fields fall back to the default order.
fn parse_ordering(raw: Option<&str>) -> (OrderField, bool) {
    let Some(raw) = raw else {
        return (OrderField::BirthYear, false);
    };
    let (field, descending) = match raw.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (raw, false),
    };
    match field {
        "name" => (OrderField::Name, descending),
        "birth_year" => (OrderField::BirthYear, descending),
        _ => (OrderField::BirthYear, false),
    }
}

/// Search semantics: the term must be a prefix of the cat's name, OR a
/// substring of any linked achievement's name, OR a substring of the owner
/// label. Case-insensitive; the three fields combine with OR.
fn matches_search(cat: &Cat, term: &str) -> bool {
    cat.name.to_lowercase().starts_with(term)
        || cat
            .achievements
            .iter()
            .any(|a| a.to_lowercase().contains(term))
        || cat.owner.to_lowercase().contains(term)
}

/// Shape the full collection into the visible, filtered, searched, ordered
/// view for one request. No owner-based restriction: read access to the
/// collection is unrestricted.
pub fn shape(params: &ShapeParams, mut cats: Vec<Cat>) -> Vec<Cat> {
    if let Some(color) = &params.color {
        cats.retain(|c| c.color == *color);
    }
    if let Some(year) = params.birth_year {
        cats.retain(|c| c.birth_year == year);
    }

    if let Some(term) = &params.search {
        let term = term.to_lowercase();
        cats.retain(|c| matches_search(c, &term));
    }

    let (field, descending) = parse_ordering(params.ordering.as_deref());
    // Stable sort: ties keep store order, so identical requests under
    // unchanged state yield identical sequences.
    cats.sort_by(|a, b| {
        let ord = match field {
            OrderField::Name => a.name.cmp(&b.name),
            OrderField::BirthYear => a.birth_year.cmp(&b.birth_year),
        };
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });

    cats
}
