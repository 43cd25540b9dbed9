//! Presentation view model shared by the terminal and browser renderers.
//!
//! Everything a renderer needs (row labels, which controls are active, when
//! to show the empty indicator) is computed here as plain data, so the
//! renderers only map it to markup or text.

use catalogview_catalog::{EnrichedProduct, FilterAction, FilterState, ReferenceData, Sex};
use catalogview_core::ProductId;

/// Shown instead of the table when no product passes the filters.
pub const NO_MATCHING_MESSAGE: &str = "No products matching selected criteria";
pub const UNKNOWN_CATEGORY: &str = "Unknown category";
pub const UNKNOWN_OWNER: &str = "Unknown owner";

/// Table column headers, in display order.
pub const COLUMNS: [&str; 4] = ["ID", "Product", "Category", "User"];

/// Text styling of the owner cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerTone {
    Male,
    Female,
    Unknown,
}

impl OwnerTone {
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            OwnerTone::Male => Some("has-text-link"),
            OwnerTone::Female => Some("has-text-danger"),
            OwnerTone::Unknown => None,
        }
    }
}

/// One display row of the product table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub category_label: String,
    pub owner_name: String,
    pub owner_tone: OwnerTone,
}

impl From<&EnrichedProduct> for ProductRow {
    fn from(product: &EnrichedProduct) -> Self {
        let category_label = product
            .category
            .as_ref()
            .map(|c| format!("{} - {}", c.icon, c.title))
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());

        let (owner_name, owner_tone) = match &product.user {
            Some(user) => (
                user.name.clone(),
                match user.sex {
                    Sex::Male => OwnerTone::Male,
                    Sex::Female => OwnerTone::Female,
                },
            ),
            None => (UNKNOWN_OWNER.to_string(), OwnerTone::Unknown),
        };

        Self {
            id: product.id(),
            name: product.name().to_string(),
            category_label,
            owner_name,
            owner_tone,
        }
    }
}

/// What the product area shows: a table, or the empty indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogView {
    Table(Vec<ProductRow>),
    NoMatches,
}

impl CatalogView {
    pub fn from_products(products: &[EnrichedProduct]) -> Self {
        if products.is_empty() {
            CatalogView::NoMatches
        } else {
            CatalogView::Table(products.iter().map(ProductRow::from).collect())
        }
    }

    pub fn rows(&self) -> &[ProductRow] {
        match self {
            CatalogView::Table(rows) => rows,
            CatalogView::NoMatches => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CatalogView::NoMatches)
    }
}

/// A user tab in the filter panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTab {
    pub label: String,
    pub active: bool,
    pub action: FilterAction,
}

/// A category toggle in the filter panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButton {
    pub title: String,
    pub selected: bool,
    pub action: FilterAction,
}

/// State of every filter control for the current filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPanel {
    pub all_users_active: bool,
    pub users: Vec<UserTab>,
    pub search_query: String,
    pub show_clear_search: bool,
    /// The "All" categories button is outlined while any category is selected.
    pub all_categories_outlined: bool,
    pub categories: Vec<CategoryButton>,
}

impl ControlPanel {
    pub fn new(reference: &ReferenceData, filter: &FilterState) -> Self {
        let users = reference
            .users()
            .iter()
            .map(|user| UserTab {
                label: user.name.clone(),
                active: filter.selected_user_name() == user.name,
                action: FilterAction::SelectUser(user.name.clone()),
            })
            .collect();

        let categories = reference
            .categories()
            .iter()
            .map(|category| CategoryButton {
                title: category.title.clone(),
                selected: filter.selected_category_titles().contains(&category.title),
                action: FilterAction::SelectCategory(category.title.clone()),
            })
            .collect();

        Self {
            all_users_active: filter.selected_user_name().is_empty(),
            users,
            search_query: filter.search_query().to_string(),
            show_clear_search: !filter.search_query().is_empty(),
            all_categories_outlined: !filter.selected_category_titles().is_empty(),
            categories,
        }
    }
}
