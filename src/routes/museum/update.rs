use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Update museum.")]
#[put("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    form: web::Json<forms::MuseumForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = path.0;
    let museum_row = db::museum::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Museum>::build().internal_server_error(err))
        .and_then(|museum| match museum {
            Some(museum) => Ok(museum),
            None => Err(JsonResponse::<models::Museum>::build().not_found("not found")),
        })?;

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Museum>::build().form_error(errors.to_string()));
    }

    // Full-document PUT: the form replaces every mutable field.
    let mut museum: models::Museum = (&*form).into();
    museum.id = museum_row.id;
    museum.created_at = museum_row.created_at;

    db::museum::update(pg_pool.get_ref(), museum)
        .await
        .map(|museum| JsonResponse::build().set_item(museum).ok("Saved"))
        .map_err(|err| JsonResponse::<models::Museum>::build().internal_server_error(err))
}
