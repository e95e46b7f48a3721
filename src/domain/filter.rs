//! Filter compilation: structured search criteria to URL path segments.
//!
//! The site routes filtered listings through ordered path segments, one per
//! active dimension, in the fixed order location / work option / category /
//! experience / industry / company size. Each dimension resolves against the
//! static catalog; anything the catalog does not know contributes nothing,
//! never an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::catalog::{
    CatalogEntry, CATEGORIES, COMPANY_SIZES, EXPERIENCE_LEVELS, INDUSTRIES, LOCATIONS,
    WORK_OPTIONS,
};

/// Selection within a hierarchical dimension: a parent key into the catalog
/// table plus the chosen subcategory labels. An empty `values` list means
/// "no restriction": the whole entry (parent and all children) is emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchicalSelection {
    pub key: u32,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Selection within a flat-membership dimension: chosen labels, validated
/// against the dimension's canonical list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatSelection {
    pub values: Vec<String>,
}

/// Structured search criteria. Omitted dimensions contribute nothing to the
/// compiled path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    pub location: Option<HierarchicalSelection>,
    pub work_option: Option<FlatSelection>,
    pub category: Option<HierarchicalSelection>,
    pub experience: Option<FlatSelection>,
    pub industry: Option<FlatSelection>,
    pub company_size: Option<FlatSelection>,
}

/// Compile a filter into the URL path fragment the site's routing expects.
///
/// Returns an empty string when no dimension produces a segment. Segments
/// are joined with `/` in dimension order; empty contributions are skipped
/// entirely, leaving no empty placeholders.
pub fn compile_filter_path(filter: Option<&FilterSpec>) -> String {
    let Some(filter) = filter else {
        return String::new();
    };

    let mut segments: Vec<String> = Vec::new();
    let mut push = |parts: Vec<String>| {
        if !parts.is_empty() {
            segments.push(parts.join("/"));
        }
    };

    if let Some(location) = &filter.location {
        push(hierarchical_parts(&LOCATIONS, location.key, &location.values));
    }
    if let Some(work_option) = &filter.work_option {
        push(flat_parts(WORK_OPTIONS, &work_option.values));
    }
    if let Some(category) = &filter.category {
        push(hierarchical_parts(&CATEGORIES, category.key, &category.values));
    }
    if let Some(experience) = &filter.experience {
        push(flat_parts(EXPERIENCE_LEVELS, &experience.values));
    }
    if let Some(industry) = &filter.industry {
        push(flat_parts(INDUSTRIES, &industry.values));
    }
    if let Some(company_size) = &filter.company_size {
        push(flat_parts(COMPANY_SIZES, &company_size.values));
    }

    segments.join("/")
}

/// Resolve a hierarchical dimension against its catalog table.
///
/// Unknown keys contribute nothing. An empty selection emits the fully
/// flattened entry (parent label plus all subcategory labels). A non-empty
/// selection emits the parent label plus the intersection of the entry's
/// subcategories with the selection, in the table's order - not the
/// caller's - so the compiled path is deterministic regardless of how the
/// selection was ordered. An entry without subcategories contributes
/// nothing to a non-empty selection.
fn hierarchical_parts(
    table: &HashMap<u32, CatalogEntry>,
    key: u32,
    selected: &[String],
) -> Vec<String> {
    let Some(entry) = table.get(&key) else {
        return Vec::new();
    };

    if selected.is_empty() {
        let mut parts = vec![entry.label.to_string()];
        parts.extend(entry.subcategories.iter().map(|s| (*s).to_string()));
        return parts;
    }

    if entry.subcategories.is_empty() {
        return Vec::new();
    }

    let mut parts = vec![entry.label.to_string()];
    parts.extend(
        entry
            .subcategories
            .iter()
            .filter(|sub| selected.iter().any(|v| v == *sub))
            .map(|s| (*s).to_string()),
    );
    parts
}

/// Resolve a flat-membership dimension: the intersection of the canonical
/// list with the selection, in canonical order. An empty selection
/// contributes nothing.
fn flat_parts(canonical: &[&str], selected: &[String]) -> Vec<String> {
    if selected.is_empty() {
        return Vec::new();
    }
    canonical
        .iter()
        .filter(|label| selected.iter().any(|v| v == **label))
        .map(|label| (*label).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn empty_filter_compiles_to_empty_path() {
        assert_eq!(compile_filter_path(None), "");
        assert_eq!(compile_filter_path(Some(&FilterSpec::default())), "");
    }

    #[test]
    fn unknown_key_contributes_nothing() {
        let filter = FilterSpec {
            category: Some(HierarchicalSelection {
                key: 999,
                values: strings(&["Design"]),
            }),
            ..Default::default()
        };
        assert_eq!(compile_filter_path(Some(&filter)), "");
    }

    #[test]
    fn empty_selection_emits_whole_entry() {
        let filter = FilterSpec {
            category: Some(HierarchicalSelection {
                key: 4,
                values: Vec::new(),
            }),
            ..Default::default()
        };
        assert_eq!(
            compile_filter_path(Some(&filter)),
            "Sales/Account Management/Business Development"
        );
    }

    #[test]
    fn selection_intersects_in_table_order() {
        // Caller order is reversed on purpose; table order must win.
        let filter = FilterSpec {
            category: Some(HierarchicalSelection {
                key: 1,
                values: strings(&["Frontend", "Backend"]),
            }),
            ..Default::default()
        };
        assert_eq!(compile_filter_path(Some(&filter)), "Engineering/Backend/Frontend");
    }

    #[test]
    fn selection_under_entry_without_subcategories_contributes_nothing() {
        let filter = FilterSpec {
            location: Some(HierarchicalSelection {
                key: 4,
                values: strings(&["Anywhere"]),
            }),
            ..Default::default()
        };
        assert_eq!(compile_filter_path(Some(&filter)), "");
    }

    #[test]
    fn selection_with_empty_intersection_emits_parent_only() {
        let filter = FilterSpec {
            category: Some(HierarchicalSelection {
                key: 1,
                values: strings(&["Gardening"]),
            }),
            ..Default::default()
        };
        assert_eq!(compile_filter_path(Some(&filter)), "Engineering");
    }

    #[rstest]
    #[case(&["On-site", "Remote"], "Remote/On-site")]
    #[case(&["Hybrid"], "Hybrid")]
    #[case(&["Freelance"], "")]
    fn work_option_intersects_in_canonical_order(
        #[case] selected: &[&str],
        #[case] expected: &str,
    ) {
        let filter = FilterSpec {
            work_option: Some(FlatSelection {
                values: strings(selected),
            }),
            ..Default::default()
        };
        assert_eq!(compile_filter_path(Some(&filter)), expected);
    }

    #[test]
    fn dimensions_join_in_fixed_order() {
        let filter = FilterSpec {
            location: Some(HierarchicalSelection {
                key: 1,
                values: strings(&["Berlin"]),
            }),
            work_option: Some(FlatSelection {
                values: strings(&["Remote"]),
            }),
            category: Some(HierarchicalSelection {
                key: 3,
                values: strings(&["Design"]),
            }),
            experience: Some(FlatSelection {
                values: strings(&["Senior Level"]),
            }),
            industry: Some(FlatSelection {
                values: strings(&["Technology"]),
            }),
            company_size: Some(FlatSelection {
                values: strings(&["51-200"]),
            }),
        };
        assert_eq!(
            compile_filter_path(Some(&filter)),
            "Europe/Berlin/Remote/Creative/Design/Senior Level/Technology/51-200"
        );
    }

    #[test]
    fn skipped_dimensions_leave_no_placeholders() {
        let filter = FilterSpec {
            work_option: Some(FlatSelection { values: Vec::new() }),
            experience: Some(FlatSelection {
                values: strings(&["Mid Level"]),
            }),
            ..Default::default()
        };
        assert_eq!(compile_filter_path(Some(&filter)), "Mid Level");
    }
}
