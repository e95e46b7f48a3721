//! Static filter catalog for the HireWire routing scheme.
//!
//! The site routes filtered listings through ordered path segments, so the
//! compiler needs the exact labels the site uses. Hierarchical dimensions
//! (location, category) are keyed tables of parent label + subcategory
//! labels; the remaining dimensions are flat canonical membership lists.
//! Tables are built once at process start and only ever read.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One parent entry of a hierarchical filter dimension.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub label: &'static str,
    pub subcategories: &'static [&'static str],
}

/// Job categories, keyed by the site's category id.
pub static CATEGORIES: Lazy<HashMap<u32, CatalogEntry>> = Lazy::new(|| {
    HashMap::from([
        (
            1,
            CatalogEntry {
                label: "Engineering",
                subcategories: &["Backend", "Frontend", "DevOps", "QA", "Data"],
            },
        ),
        (
            2,
            CatalogEntry {
                label: "Marketing",
                subcategories: &["Content", "SEO", "Social Media", "Performance"],
            },
        ),
        (
            3,
            CatalogEntry {
                label: "Creative",
                subcategories: &["Design", "Illustration", "Video", "Copywriting"],
            },
        ),
        (
            4,
            CatalogEntry {
                label: "Sales",
                subcategories: &["Account Management", "Business Development"],
            },
        ),
        (
            5,
            CatalogEntry {
                label: "Finance",
                subcategories: &["Accounting", "Audit", "Payroll"],
            },
        ),
        (
            6,
            CatalogEntry {
                label: "Human Resources",
                subcategories: &["Recruiting", "People Operations"],
            },
        ),
    ])
});

/// Locations, keyed by the site's region id. The `Worldwide` entry has no
/// subcategories; selecting subcategories under it contributes nothing.
pub static LOCATIONS: Lazy<HashMap<u32, CatalogEntry>> = Lazy::new(|| {
    HashMap::from([
        (
            1,
            CatalogEntry {
                label: "Europe",
                subcategories: &["London", "Berlin", "Amsterdam", "Paris", "Madrid"],
            },
        ),
        (
            2,
            CatalogEntry {
                label: "North America",
                subcategories: &["New York", "San Francisco", "Toronto", "Austin"],
            },
        ),
        (
            3,
            CatalogEntry {
                label: "Asia",
                subcategories: &["Singapore", "Tokyo", "Bangalore"],
            },
        ),
        (
            4,
            CatalogEntry {
                label: "Worldwide",
                subcategories: &[],
            },
        ),
    ])
});

/// Canonical work options, in the site's routing order.
pub const WORK_OPTIONS: &[&str] = &["Remote", "Hybrid", "On-site"];

/// Canonical experience levels.
pub const EXPERIENCE_LEVELS: &[&str] = &[
    "Internship",
    "Entry Level",
    "Mid Level",
    "Senior Level",
    "Director",
    "Executive",
];

/// Canonical industries.
pub const INDUSTRIES: &[&str] = &[
    "Technology",
    "Finance",
    "Healthcare",
    "Education",
    "Retail",
    "Manufacturing",
    "Media",
];

/// Canonical company-size buckets.
pub const COMPANY_SIZES: &[&str] = &["1-10", "11-50", "51-200", "201-500", "501-1000", "1000+"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_expose_expected_entries() {
        assert_eq!(CATEGORIES.get(&3).map(|e| e.label), Some("Creative"));
        assert!(CATEGORIES[&3].subcategories.contains(&"Design"));
        assert_eq!(LOCATIONS.get(&1).map(|e| e.label), Some("Europe"));
        assert!(CATEGORIES.get(&999).is_none());
    }

    #[test]
    fn worldwide_has_no_subcategories() {
        assert!(LOCATIONS[&4].subcategories.is_empty());
    }
}
