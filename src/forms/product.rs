use crate::models;
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct ProductForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub name: String,
    #[validate(max_length = 5000)]
    pub description: Option<String>,
    #[validate(minimum = 0.0)]
    pub price: f64,
    #[validate(minimum = 0)]
    pub quantity: i32,
    pub image: Option<String>,
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub seller: String,
    #[validate(min_length = 1)]
    pub owner_id: String,
}

impl ProductForm {
    /// The image travels either as a URL or inline as a base64 data URI.
    /// Rejects data URIs whose payload is not valid base64.
    pub fn image_error(&self) -> Option<String> {
        let image = match self.image.as_deref() {
            Some(image) if !image.is_empty() => image,
            _ => return None,
        };

        if let Some(rest) = image.strip_prefix("data:") {
            let payload = match rest.split_once(";base64,") {
                Some((_mime, payload)) => payload,
                None => return Some("image data URI must be base64 encoded".to_string()),
            };
            if general_purpose::STANDARD.decode(payload).is_err() {
                return Some("image data URI payload is not valid base64".to_string());
            }
        } else if !image.starts_with("http://") && !image.starts_with("https://") {
            return Some("image must be a URL or a base64 data URI".to_string());
        }

        None
    }
}

impl From<&ProductForm> for models::Product {
    fn from(form: &ProductForm) -> Self {
        let mut product = models::Product::default();
        product.name = form.name.clone();
        product.description = form.description.clone().unwrap_or_default();
        product.price = form.price;
        product.quantity = form.quantity;
        product.image = form.image.clone().unwrap_or_default();
        product.seller = form.seller.clone();
        product.owner_id = form.owner_id.clone();

        product
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_image(image: Option<&str>) -> ProductForm {
        ProductForm {
            name: "Postcard set".to_string(),
            description: None,
            price: 4.5,
            quantity: 10,
            image: image.map(str::to_string),
            seller: "Museum shop".to_string(),
            owner_id: "seller-1".to_string(),
        }
    }

    #[test]
    fn url_and_data_uri_images_are_accepted() {
        assert!(form_with_image(Some("https://cdn.example.com/p.png"))
            .image_error()
            .is_none());
        assert!(form_with_image(Some("data:image/png;base64,aGVsbG8="))
            .image_error()
            .is_none());
        assert!(form_with_image(None).image_error().is_none());
    }

    #[test]
    fn malformed_images_are_rejected() {
        assert!(form_with_image(Some("data:image/png;base64,@@not-base64@@"))
            .image_error()
            .is_some());
        assert!(form_with_image(Some("data:image/png,plainpayload"))
            .image_error()
            .is_some());
        assert!(form_with_image(Some("ftp://example.com/p.png"))
            .image_error()
            .is_some());
    }

    #[test]
    fn negative_price_fails_validation() {
        let mut form = form_with_image(None);
        form.price = -1.0;
        assert!(form.validate().is_err());
    }
}
