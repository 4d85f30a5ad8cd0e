use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct CartItemForm {
    pub product_id: i32,
    #[validate(minimum = 1)]
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct WishlistForm {
    pub product_id: i32,
}
