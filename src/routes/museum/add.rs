use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add museum.")]
#[post("")]
pub async fn item(
    form: web::Json<forms::MuseumForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Museum>::build().form_error(errors.to_string()));
    }

    let museum: models::Museum = (&*form).into();

    db::museum::insert(pg_pool.get_ref(), museum)
        .await
        .map(|museum| JsonResponse::build().set_item(museum).ok("Saved"))
        .map_err(|err| JsonResponse::<models::Museum>::build().internal_server_error(err))
}
