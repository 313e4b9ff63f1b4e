use crate::products::repo_types::Product;

/// Browse state for the product catalog: the fetched list plus the active
/// search text and category filter. The visible subset is derived on every
/// call rather than stored, so it can never drift from its inputs.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
    search: String,
    category: Option<String>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list wholesale after a reload; the server stays the
    /// source of truth.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// `None` means no category filter.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Distinct categories across the current list, lowercased, in first-seen
    /// order. Feeds the filter dropdown.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for product in &self.products {
            let category = product.category.to_lowercase();
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// Products matching the active search and category filter. Search is a
    /// case-insensitive substring match against title, description, or
    /// category; the category filter is case-insensitive equality.
    pub fn visible(&self) -> Vec<&Product> {
        let needle = self.search.trim().to_lowercase();
        self.products
            .iter()
            .filter(|product| {
                let searched = needle.is_empty()
                    || product.title.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
                    || product.category.to_lowercase().contains(&needle);
                // Unicode-aware so a value out of categories() always matches.
                let in_category = self
                    .category
                    .as_deref()
                    .map(|category| product.category.to_lowercase() == category.to_lowercase())
                    .unwrap_or(true);
                searched && in_category
            })
            .collect()
    }
}
