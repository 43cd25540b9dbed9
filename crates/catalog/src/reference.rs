//! Read-only reference collections and their lookup index.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

use serde::de::DeserializeOwned;

use catalogview_core::{CategoryId, Entity, ProductId, UserId};

use crate::error::{CatalogError, CatalogResult};
use crate::model::{Category, Product, User};

const BUNDLED_USERS: &str = include_str!("../data/users.json");
const BUNDLED_CATEGORIES: &str = include_str!("../data/categories.json");
const BUNDLED_PRODUCTS: &str = include_str!("../data/products.json");

/// A foreign key in the reference data that resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DanglingReference {
    /// `product.categoryId` matches no category.
    Category {
        product_id: ProductId,
        category_id: CategoryId,
    },
    /// `category.ownerId` matches no user.
    Owner {
        category_id: CategoryId,
        owner_id: UserId,
    },
}

impl core::fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DanglingReference::Category {
                product_id,
                category_id,
            } => write!(f, "product {product_id} references missing category {category_id}"),
            DanglingReference::Owner {
                category_id,
                owner_id,
            } => write!(f, "category {category_id} references missing owner {owner_id}"),
        }
    }
}

/// The users, categories and products a catalog view is derived from.
///
/// Built once; the collections and the id index are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
    user_index: HashMap<UserId, usize>,
    category_index: HashMap<CategoryId, usize>,
}

impl ReferenceData {
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        let user_index = build_index(&users);
        let category_index = build_index(&categories);
        Self {
            users,
            categories,
            products,
            user_index,
            category_index,
        }
    }

    /// Parse the three collections from JSON arrays.
    pub fn from_json(users: &str, categories: &str, products: &str) -> CatalogResult<Self> {
        let data = Self::new(
            parse_collection("users", users)?,
            parse_collection("categories", categories)?,
            parse_collection("products", products)?,
        );
        data.report_dangling();
        Ok(data)
    }

    /// The data set compiled into this crate.
    pub fn bundled() -> CatalogResult<Self> {
        Self::from_json(BUNDLED_USERS, BUNDLED_CATEGORIES, BUNDLED_PRODUCTS)
    }

    /// Load `users.json`, `categories.json` and `products.json` from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> CatalogResult<Self> {
        let dir = dir.as_ref();
        let read = |file: &str| {
            let path = dir.join(file);
            std::fs::read_to_string(&path).map_err(|source| CatalogError::Io { path, source })
        };

        let users = read("users.json")?;
        let categories = read("categories.json")?;
        let products = read("products.json")?;

        tracing::info!(dir = %dir.display(), "loading reference data");
        Self::from_json(&users, &categories, &products)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// First user with the given id.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.user_index.get(&id).and_then(|&i| self.users.get(i))
    }

    /// First category with the given id.
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.category_index.get(&id).and_then(|&i| self.categories.get(i))
    }

    /// Resolve a product's category and, through it, the category owner.
    ///
    /// A missing category short-circuits the owner lookup.
    pub fn resolve(&self, product: &Product) -> (Option<&Category>, Option<&User>) {
        let category = self.category(product.category_id);
        let user = category.and_then(|c| self.user(c.owner_id));
        (category, user)
    }

    /// Foreign keys that resolve to nothing, in collection order
    /// (products first, then categories).
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let products = self
            .products
            .iter()
            .filter(|p| self.category(p.category_id).is_none())
            .map(|p| DanglingReference::Category {
                product_id: p.id,
                category_id: p.category_id,
            });
        let owners = self
            .categories
            .iter()
            .filter(|c| self.user(c.owner_id).is_none())
            .map(|c| DanglingReference::Owner {
                category_id: c.id,
                owner_id: c.owner_id,
            });
        products.chain(owners).collect()
    }

    fn report_dangling(&self) {
        for dangling in self.dangling_references() {
            tracing::warn!(%dangling, "unresolved reference in catalog data");
        }
        tracing::info!(
            users = self.users.len(),
            categories = self.categories.len(),
            products = self.products.len(),
            "reference data loaded"
        );
    }
}

fn build_index<T: Entity>(records: &[T]) -> HashMap<T::Id, usize> {
    let mut index = HashMap::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        // keep the first record for duplicate ids
        if let Entry::Vacant(slot) = index.entry(record.id()) {
            slot.insert(position);
        }
    }
    index
}

fn parse_collection<T: DeserializeOwned>(
    collection: &'static str,
    json: &str,
) -> CatalogResult<Vec<T>> {
    serde_json::from_str(json).map_err(|source| CatalogError::Parse { collection, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sex;

    fn user(id: u64, name: &str) -> User {
        User {
            id: UserId::new(id),
            name: name.to_string(),
            sex: Sex::Male,
        }
    }

    fn category(id: u64, title: &str, owner: u64) -> Category {
        Category {
            id: CategoryId::new(id),
            title: title.to_string(),
            icon: "🍞".to_string(),
            owner_id: UserId::new(owner),
        }
    }

    fn product(id: u64, name: &str, category: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category_id: CategoryId::new(category),
        }
    }

    #[test]
    fn bundled_data_loads_without_dangling_references() {
        let data = ReferenceData::bundled().unwrap();
        assert!(!data.users().is_empty());
        assert!(!data.categories().is_empty());
        assert!(!data.products().is_empty());
        assert!(data.dangling_references().is_empty());
    }

    #[test]
    fn duplicate_ids_resolve_to_first_record() {
        let data = ReferenceData::new(
            vec![user(1, "Max"), user(1, "Impostor")],
            vec![category(1, "Grocery", 1), category(1, "Shadow", 1)],
            vec![],
        );
        assert_eq!(data.user(UserId::new(1)).unwrap().name, "Max");
        assert_eq!(data.category(CategoryId::new(1)).unwrap().title, "Grocery");
    }

    #[test]
    fn missing_category_short_circuits_owner_lookup() {
        let data = ReferenceData::new(vec![user(1, "Max")], vec![], vec![product(1, "Milk", 7)]);
        let (category, owner) = data.resolve(&data.products()[0]);
        assert!(category.is_none());
        assert!(owner.is_none());
    }

    #[test]
    fn reports_dangling_categories_and_owners() {
        let data = ReferenceData::new(
            vec![user(1, "Max")],
            vec![category(1, "Grocery", 1), category(2, "Orphaned", 99)],
            vec![product(1, "Milk", 1), product(2, "Ghost", 42)],
        );

        assert_eq!(
            data.dangling_references(),
            vec![
                DanglingReference::Category {
                    product_id: ProductId::new(2),
                    category_id: CategoryId::new(42),
                },
                DanglingReference::Owner {
                    category_id: CategoryId::new(2),
                    owner_id: UserId::new(99),
                },
            ]
        );
    }

    #[test]
    fn malformed_json_names_the_collection() {
        let err = ReferenceData::from_json("[]", "not json", "[]").unwrap_err();
        match err {
            CatalogError::Parse { collection, .. } => assert_eq!(collection, "categories"),
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let err = ReferenceData::load_dir("/nonexistent/catalogview-data").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
