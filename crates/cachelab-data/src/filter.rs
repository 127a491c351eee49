//! Pure product filtering for the products page.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Category selection: either the "all" pseudo-category or a concrete one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Show every category.
    All,
    /// Show only products in the named category.
    Category(String),
}

impl CategoryFilter {
    /// Parse the `category` query parameter. Absent or `all` selects all.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("all") => Self::All,
            Some(name) => Self::Category(name.to_string()),
        }
    }

    /// Whether a product passes this category selection.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => product.category == *name,
        }
    }

    /// Label for the filter button row.
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Category(name) => name,
        }
    }

    /// Value used in the query string.
    pub fn query_value(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(name) => name,
        }
    }
}

/// Selection state of the product filter view.
///
/// Arrives in the query string on every request; applying it is a pure
/// function of the state and the product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    /// Active category selection. Defaults to `All`.
    pub category: CategoryFilter,
    /// When true, only in-stock products are shown. Defaults to false.
    pub in_stock_only: bool,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            in_stock_only: false,
        }
    }
}

impl ProductFilter {
    /// Parse the `category` and `in_stock` query parameters.
    pub fn from_query(category: Option<&str>, in_stock: Option<&str>) -> Self {
        Self {
            category: CategoryFilter::from_query(category),
            in_stock_only: matches!(in_stock, Some("1") | Some("true")),
        }
    }

    /// The subset of `products` matching this selection, in original order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|p| self.category.matches(p) && (!self.in_stock_only || p.in_stock))
            .collect()
    }
}

/// Category options for the filter row: the distinct categories present in
/// the product list, in first-appearance order, prefixed with `All`.
pub fn category_options(products: &[Product]) -> Vec<CategoryFilter> {
    let mut options = vec![CategoryFilter::All];
    for product in products {
        let candidate = CategoryFilter::Category(product.category.clone());
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_products;

    #[test]
    fn test_default_filter_returns_everything_in_order() {
        let products = sample_products();
        let shown = ProductFilter::default().apply(&products);

        assert_eq!(shown.len(), products.len());
        let ids: Vec<u32> = shown.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_in_stock_only() {
        let products = sample_products();
        let filter = ProductFilter {
            category: CategoryFilter::All,
            in_stock_only: true,
        };

        let shown = filter.apply(&products);
        assert!(shown.iter().all(|p| p.in_stock));
        assert_eq!(shown.len(), products.iter().filter(|p| p.in_stock).count());
    }

    #[test]
    fn test_category_selection() {
        let products = sample_products();
        let filter = ProductFilter {
            category: CategoryFilter::Category("Audio".to_string()),
            in_stock_only: false,
        };

        let shown = filter.apply(&products);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].category, "Audio");
    }

    #[test]
    fn test_empty_result_is_a_valid_outcome() {
        let products = sample_products();
        // Audio's only product is out of stock.
        let filter = ProductFilter {
            category: CategoryFilter::Category("Audio".to_string()),
            in_stock_only: true,
        };

        assert!(filter.apply(&products).is_empty());
    }

    #[test]
    fn test_category_options_are_distinct_and_prefixed() {
        let products = sample_products();
        let options = category_options(&products);

        assert_eq!(options[0], CategoryFilter::All);
        assert_eq!(options.len(), 5);

        let mut seen = std::collections::HashSet::new();
        assert!(options.iter().all(|o| seen.insert(o.label().to_string())));
    }

    #[test]
    fn test_query_parsing() {
        let filter = ProductFilter::from_query(Some("Tablets"), Some("1"));
        assert_eq!(
            filter.category,
            CategoryFilter::Category("Tablets".to_string())
        );
        assert!(filter.in_stock_only);

        assert_eq!(ProductFilter::from_query(None, None), ProductFilter::default());
        assert_eq!(
            ProductFilter::from_query(Some("all"), Some("0")),
            ProductFilter::default()
        );
    }
}
