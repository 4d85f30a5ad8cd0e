use crate::configuration::Settings;
use crate::connectors;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, middleware, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let payment_client = connectors::PaymentClient::new(&settings.payment)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let payment_connector: web::Data<Arc<dyn connectors::PaymentConnector>> =
        web::Data::new(Arc::new(payment_client));

    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "{{\"kind\":\"deserialize\",\"line\":{}, \"column\":{}, \"msg\":\"{}\"}}",
                err.line(),
                err.column(),
                err
            ),
            _ => format!("{{\"kind\":\"other\",\"msg\":\"{}\"}}", err),
        };
        error::InternalError::new(msg, http::StatusCode::BAD_REQUEST).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/museums")
                    .service(routes::museum::get::list)
                    .service(routes::museum::add::item)
                    .service(routes::museum::get::item)
                    .service(routes::museum::update::item)
                    .service(routes::museum::delete::item),
            )
            .service(
                web::scope("/products")
                    .service(routes::product::get::list)
                    .service(routes::product::add::item)
                    .service(routes::product::purchase::check)
                    .service(routes::product::wishlist::toggle)
                    .service(routes::product::wishlist::list)
                    .service(routes::product::cart::add)
                    .service(routes::product::cart::list)
                    .service(routes::product::cart::remove)
                    .service(routes::product::checkout::cart)
                    .service(routes::product::delete::seller)
                    .service(routes::product::review::add)
                    .service(routes::product::review::list)
                    .service(routes::product::archive::toggle)
                    .service(routes::product::get::item)
                    .service(routes::product::update::item),
            )
            .service(
                web::scope("/tourist")
                    .service(routes::tourist::history::list)
                    .service(routes::tourist::review::add_activity)
                    .service(routes::tourist::review::list_activity)
                    .service(routes::tourist::review::add_itinerary)
                    .service(routes::tourist::review::add_tour_guide),
            )
            .service(
                web::scope("/tags")
                    .service(
                        web::scope("/museum")
                            .service(routes::tag::museum::list)
                            .service(routes::tag::museum::add)
                            .service(routes::tag::museum::remove),
                    )
                    .service(
                        web::scope("/preference")
                            .service(routes::tag::preference::list)
                            .service(routes::tag::preference::add)
                            .service(routes::tag::preference::remove),
                    ),
            )
            .service(web::scope("/payments").service(routes::payment::handler))
            .service(
                web::scope("/admin")
                    .service(web::scope("/products").service(routes::product::get::admin_list)),
            )
            .app_data(json_config.clone())
            .app_data(pg_pool.clone())
            .app_data(payment_connector.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
