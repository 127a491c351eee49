//! Fixed sample catalog and its fetch operations.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::sleep;

/// Simulated latency for the full product list.
pub const PRODUCTS_DELAY: Duration = Duration::from_millis(500);
/// Simulated latency for the user record.
pub const USER_DELAY: Duration = Duration::from_millis(300);
/// Simulated latency for a single product lookup.
pub const PRODUCT_BY_ID_DELAY: Duration = Duration::from_millis(400);

/// A product in the sample catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within the sample set.
    pub id: u32,
    pub name: String,
    /// Price in the smallest currency unit.
    pub price: u32,
    pub description: String,
    pub category: String,
    /// Image path, served as a placeholder by the demo pages.
    pub image: String,
    pub in_stock: bool,
}

impl Product {
    /// Price formatted for display.
    pub fn display_price(&self) -> String {
        format!("${}.{:02}", self.price / 100, self.price % 100)
    }
}

/// Role of the sample user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

/// The signed-in sample user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// The fixed product sample set.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Falcon Pro 14\" Laptop".to_string(),
            price: 249_900,
            description: "High-performance notebook for creative work".to_string(),
            category: "Laptops".to_string(),
            image: "/images/falcon-laptop.jpg".to_string(),
            in_stock: true,
        },
        Product {
            id: 2,
            name: "Slate Tab 12.9\"".to_string(),
            price: 172_800,
            description: "Professional tablet with stylus support".to_string(),
            category: "Tablets".to_string(),
            image: "/images/slate-tab.jpg".to_string(),
            in_stock: true,
        },
        Product {
            id: 3,
            name: "Echo Buds ANC".to_string(),
            price: 39_800,
            description: "True wireless earbuds with noise cancelling".to_string(),
            category: "Audio".to_string(),
            image: "/images/echo-buds.jpg".to_string(),
            in_stock: false,
        },
        Product {
            id: 4,
            name: "Glide Wireless Keyboard".to_string(),
            price: 13_800,
            description: "Low-profile wireless keyboard with fingerprint unlock".to_string(),
            category: "Accessories".to_string(),
            image: "/images/glide-keyboard.jpg".to_string(),
            in_stock: true,
        },
    ]
}

/// The single sample user.
pub fn sample_user() -> User {
    User {
        id: 1,
        name: "Taro Yamada".to_string(),
        email: "taro@example.com".to_string(),
        role: Role::Customer,
    }
}

/// Fetch the full product list after the simulated network delay.
///
/// Always succeeds; the data is static.
pub async fn fetch_products() -> Vec<Product> {
    sleep(PRODUCTS_DELAY).await;
    sample_products()
}

/// Fetch the signed-in user after the simulated network delay.
pub async fn fetch_user() -> User {
    sleep(USER_DELAY).await;
    sample_user()
}

/// Fetch one product by id after the simulated network delay.
///
/// An unmatched id resolves to `None`; "not found" is a valid outcome here,
/// not an error.
pub async fn fetch_product_by_id(id: u32) -> Option<Product> {
    sleep(PRODUCT_BY_ID_DELAY).await;
    sample_products().into_iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_product_ids_are_unique() {
        let products = sample_products();
        let ids: HashSet<u32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_prices_are_positive() {
        assert!(sample_products().iter().all(|p| p.price > 0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_twice_returns_identical_data() {
        assert_eq!(fetch_products().await, fetch_products().await);
        assert_eq!(fetch_user().await, fetch_user().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_by_id_hit() {
        let product = fetch_product_by_id(2).await.unwrap();
        assert_eq!(product.name, "Slate Tab 12.9\"");
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_by_id_miss_is_none() {
        assert!(fetch_product_by_id(9999).await.is_none());
    }

    #[test]
    fn test_display_price() {
        let product = &sample_products()[3];
        assert_eq!(product.display_price(), "$138.00");
    }
}
