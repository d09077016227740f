use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
}

/// Incoming product body. A missing key and an explicit `null` are both `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub category: Option<String>,
}

impl ProductRequest {
    /// Returns a full product when every field is present and the id is usable
    /// as a key: not blank and free of NUL characters.
    pub fn into_product(self) -> Option<Product> {
        let id = self
            .id
            .filter(|id| !id.trim().is_empty() && !id.contains('\0'))?;

        Some(Product {
            id,
            name: self.name?,
            description: self.description?,
            price: self.price?,
            image: self.image?,
            category: self.category?,
        })
    }

    /// Overwrites every field of `product` that is present in the request.
    /// The request's `id` is never applied.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 9.99,
            image: "img.png".to_string(),
            category: "tools".to_string(),
        }
    }

    #[test]
    fn null_and_missing_fields_are_absent() {
        let req: ProductRequest =
            serde_json::from_str(r#"{"id":"p1","name":null,"price":2.5}"#).unwrap();
        assert_eq!(req.id.as_deref(), Some("p1"));
        assert!(req.name.is_none());
        assert!(req.category.is_none());
        assert_eq!(req.price, Some(2.5));
    }

    #[test]
    fn into_product_requires_every_field() {
        let full = ProductRequest {
            id: Some("p1".to_string()),
            name: Some("Widget".to_string()),
            description: Some("A widget".to_string()),
            price: Some(9.99),
            image: Some("img.png".to_string()),
            category: Some("tools".to_string()),
        };
        assert_eq!(full.clone().into_product(), Some(widget()));

        let missing_image = ProductRequest {
            image: None,
            ..full.clone()
        };
        assert!(missing_image.into_product().is_none());

        let blank_id = ProductRequest {
            id: Some("  ".to_string()),
            ..full.clone()
        };
        assert!(blank_id.into_product().is_none());

        let nul_id = ProductRequest {
            id: Some("a\u{0}".to_string()),
            ..full
        };
        assert!(nul_id.into_product().is_none());
    }

    #[test]
    fn apply_to_keeps_id_and_absent_fields() {
        let mut product = widget();
        ProductRequest {
            id: Some("other".to_string()),
            name: Some("Gadget".to_string()),
            ..Default::default()
        }
        .apply_to(&mut product);

        assert_eq!(product.id, "p1");
        assert_eq!(product.name, "Gadget");
        assert_eq!(product.description, "A widget");
        assert_eq!(product.price, 9.99);
    }
}
