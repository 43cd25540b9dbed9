use core::str::FromStr;

use serde::{Deserialize, Serialize};

use catalogview_core::{CategoryId, DomainError, Entity, ProductId, UserId};

/// Sex of a user, as carried by the reference data (`"m"` / `"f"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }
}

impl FromStr for Sex {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(Sex::Male),
            "f" => Ok(Sex::Female),
            other => Err(DomainError::validation(format!(
                "sex must be \"m\" or \"f\", got {other:?}"
            ))),
        }
    }
}

impl TryFrom<String> for Sex {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Sex> for String {
    fn from(value: Sex) -> Self {
        value.as_str().to_string()
    }
}

/// A user; owns zero or more categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

/// A product category with its display icon and owning user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,
    pub owner_id: UserId,
}

/// A raw product record, as supplied by the data provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
}

/// A product joined with its category and the category's owner.
///
/// Unresolved references stay `None`; the row itself is always kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedProduct {
    #[serde(flatten)]
    pub product: Product,
    pub category: Option<Category>,
    pub user: Option<User>,
}

impl EnrichedProduct {
    pub fn new(product: &Product, category: Option<&Category>, user: Option<&User>) -> Self {
        Self {
            product: product.clone(),
            category: category.cloned(),
            user: user.cloned(),
        }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_uses_camel_case_wire_names() {
        let json = r#"{"id":1,"title":"Grocery","icon":"🍞","ownerId":2}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.owner_id, UserId::new(2));

        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["ownerId"], 2);
    }

    #[test]
    fn sex_round_trips_through_single_letter_codes() {
        let user: User = serde_json::from_str(r#"{"id":1,"name":"Anna","sex":"f"}"#).unwrap();
        assert_eq!(user.sex, Sex::Female);
        assert_eq!(serde_json::to_value(&user).unwrap()["sex"], "f");
    }

    #[test]
    fn unknown_sex_is_rejected() {
        let err = serde_json::from_str::<User>(r#"{"id":1,"name":"Kim","sex":"x"}"#).unwrap_err();
        assert!(err.to_string().contains("sex must be"));

        match "x".parse::<Sex>() {
            Err(DomainError::Validation(_)) => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn enriched_product_flattens_product_fields() {
        let product = Product {
            id: ProductId::new(1),
            name: "Milk".to_string(),
            category_id: CategoryId::new(9),
        };
        let enriched = EnrichedProduct::new(&product, None, None);
        let json = serde_json::to_value(&enriched).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Milk");
        assert_eq!(json["categoryId"], 9);
        assert!(json["category"].is_null());
        assert!(json["user"].is_null());
    }
}
