//! Menu filtering.

use crate::catalog::{MenuCategory, MenuItem};
use crate::search::{FacetValue, MenuQuery, MenuResults, Selector};

/// Items of `catalog` matching every criterion of `query`, in catalog order.
pub fn filter(catalog: &[MenuItem], query: &MenuQuery) -> Vec<MenuItem> {
    catalog
        .iter()
        .filter(|item| query.matches(item))
        .cloned()
        .collect()
}

/// Filter `catalog` and count each category chip alongside.
pub fn search(catalog: &[MenuItem], query: &MenuQuery) -> MenuResults {
    let items = filter(catalog, query);

    MenuResults {
        items,
        catalog_size: catalog.len(),
        facets: category_facets(catalog, query),
        applied: Some(query.clone()),
    }
}

fn category_facets(catalog: &[MenuItem], query: &MenuQuery) -> Vec<FacetValue> {
    let candidates: Vec<&MenuItem> = catalog
        .iter()
        .filter(|item| query.matches_except_category(item))
        .collect();

    let mut facets = Vec::with_capacity(MenuCategory::ALL.len() + 1);
    facets.push(FacetValue {
        category: Selector::All,
        count: candidates.len(),
        selected: query.category.is_all(),
    });
    for category in MenuCategory::ALL {
        let selector = Selector::Only(category);
        facets.push(FacetValue {
            category: selector,
            count: candidates.iter().filter(|item| item.category == category).count(),
            selected: query.category == selector,
        });
    }
    facets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{menu, SpiceLevel};

    fn ids(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn test_unrestricted_returns_catalog_in_order() {
        let catalog = menu();
        let results = filter(catalog, &MenuQuery::default());
        assert_eq!(results.as_slice(), catalog);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let query = MenuQuery::new().with_search("chicken").vegetarian_only();
        let once = filter(menu(), &query);
        let twice = filter(&once, &query);
        assert_eq!(once, twice);

        let query = MenuQuery::new().with_spice_level(SpiceLevel::Mild);
        let once = filter(menu(), &query);
        assert_eq!(filter(&once, &query), once);
    }

    #[test]
    fn test_vegetarian_only() {
        let results = filter(menu(), &MenuQuery::new().vegetarian_only());
        assert!(!results.is_empty());
        assert!(results.iter().all(|item| item.is_vegetarian));
    }

    #[test]
    fn test_combined_criteria() {
        let query = MenuQuery::new()
            .with_category(MenuCategory::BurgersWraps)
            .with_spice_level(SpiceLevel::Mild)
            .vegetarian_only();
        assert_eq!(ids(&filter(menu(), &query)), vec!["5"]);
    }

    #[test]
    fn test_search_matches_description() {
        let results = filter(menu(), &MenuQuery::new().with_search("CUSTARD"));
        assert_eq!(ids(&results), vec!["13"]);
    }

    #[test]
    fn test_search_reports_counts_and_facets() {
        let query = MenuQuery::new().vegetarian_only().with_category(MenuCategory::Desserts);
        let results = search(menu(), &query);

        assert_eq!(results.catalog_size, menu().len());
        assert_eq!(results.len(), 2);
        assert!(!results.is_pending());

        let desserts = results.facet(Selector::Only(MenuCategory::Desserts)).unwrap();
        assert!(desserts.selected);
        assert_eq!(desserts.count, 2);

        let all = results.facet(Selector::All).unwrap();
        assert!(!all.selected);
        assert_eq!(all.count, filter(menu(), &MenuQuery::new().vegetarian_only()).len());
        assert_eq!(results.facets.len(), MenuCategory::ALL.len() + 1);
    }

    #[test]
    fn test_no_match_is_empty_not_pending() {
        let results = search(menu(), &MenuQuery::new().with_search("sushi"));
        assert!(results.is_empty());
        assert!(!results.is_pending());
        assert!(results.facets.iter().all(|facet| facet.count == 0));
    }
}
