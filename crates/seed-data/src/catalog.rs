//! The fixed demo catalog inserted by the seeder.
//!
//! One merchant, three categories, four products. The payloads are literal by
//! design: the point of seeding is a known-good dataset, not generated data,
//! so nothing here is configurable.

use crate::models::MerchantStatus;

/// Category names seeded, in creation order. Products reference categories by
/// these names.
pub const CATEGORY_NAMES: [&str; 3] = ["Smartphones", "Laptops", "Headphones"];

/// Payload for the single demo merchant.
#[derive(Debug, Clone)]
pub struct MerchantSeed {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub status: MerchantStatus,
}

/// Returns the demo merchant payload.
pub fn merchant() -> MerchantSeed {
    MerchantSeed {
        name: "Tech Store",
        email: "merchant@techstore.com",
        phone: "+123456789",
        address: "123 Tech Street",
        status: MerchantStatus::Active,
    }
}

/// Payload for one demo product, before ids and slug are attached.
#[derive(Debug, Clone)]
pub struct ProductSeed {
    pub title: &'static str,
    /// Price in the smallest currency unit.
    pub price: i64,
    pub description: &'static str,
    pub manufacturer: &'static str,
    /// Name of the category this product belongs to; must be one of
    /// [`CATEGORY_NAMES`].
    pub category: &'static str,
    pub in_stock: i32,
    pub main_image: &'static str,
    /// Star rating, 1 to 5.
    pub rating: i32,
}

/// Returns the four demo products.
pub fn products() -> Vec<ProductSeed> {
    vec![
        ProductSeed {
            title: "Samsung Galaxy S24 Ultra",
            price: 15_999_999,
            description: "Smartphone flagship dengan kamera 200MP dan S Pen",
            manufacturer: "Samsung",
            category: "Smartphones",
            in_stock: 50,
            main_image: "/samsung-s24.jpg",
            rating: 5,
        },
        ProductSeed {
            title: "iPhone 15 Pro Max",
            price: 17_999_999,
            description: "iPhone terbaru dengan chip A17 Pro dan kamera titanium",
            manufacturer: "Apple",
            category: "Smartphones",
            in_stock: 30,
            main_image: "/iphone-15.jpg",
            rating: 5,
        },
        ProductSeed {
            title: "MacBook Pro M3",
            price: 25_999_999,
            description: "Laptop untuk profesional dengan chip M3 yang powerful",
            manufacturer: "Apple",
            category: "Laptops",
            in_stock: 20,
            main_image: "/macbook-m3.jpg",
            rating: 4,
        },
        ProductSeed {
            title: "Sony WH-1000XM5",
            price: 4_999_999,
            description: "Headphone noise cancelling terbaik dari Sony",
            manufacturer: "Sony",
            category: "Headphones",
            in_stock: 75,
            main_image: "/sony-wh1000xm5.jpg",
            rating: 4,
        },
    ]
}
