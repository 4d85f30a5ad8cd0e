use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use sqlx::PgPool;

/// Materializes the user's cart into purchase records: one purchase per
/// cart line at the product's current price, sales counters bumped,
/// stock drawn down, cart cleared.
#[tracing::instrument(name = "Checkout cart.")]
#[post("/checkout/{user_id}")]
pub async fn cart(
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let user_id = path.into_inner().0;

    let items = db::cart::fetch_by_user(pg_pool.get_ref(), &user_id)
        .await
        .map_err(|err| JsonResponse::<models::Purchase>::build().internal_server_error(err))?;

    if items.is_empty() {
        return Err(JsonResponse::<models::Purchase>::build().bad_request("Cart is empty"));
    }

    let mut purchases = Vec::with_capacity(items.len());
    for item in items {
        let product = db::product::fetch(pg_pool.get_ref(), item.product_id)
            .await
            .map_err(|err| JsonResponse::<models::Purchase>::build().internal_server_error(err))?
            .ok_or_else(|| {
                JsonResponse::<models::Purchase>::build()
                    .bad_request(format!("Product {} no longer exists", item.product_id))
            })?;

        let purchase = models::Purchase {
            user_id: user_id.clone(),
            product_id: product.id,
            quantity: item.quantity,
            unit_price: product.price,
            ..Default::default()
        };

        let purchase = db::purchase::insert(pg_pool.get_ref(), purchase)
            .await
            .map_err(|err| JsonResponse::<models::Purchase>::build().internal_server_error(err))?;

        db::product::record_sale(pg_pool.get_ref(), product.id, item.quantity)
            .await
            .map_err(|err| JsonResponse::<models::Purchase>::build().internal_server_error(err))?;

        purchases.push(purchase);
    }

    db::cart::clear(pg_pool.get_ref(), &user_id)
        .await
        .map_err(|err| JsonResponse::<models::Purchase>::build().internal_server_error(err))?;

    Ok(JsonResponse::build().set_list(purchases).ok("Purchased"))
}
