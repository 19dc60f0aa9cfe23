use actix_web::{App, HttpServer, middleware, web};

use presence_analyzer::config::AppConfig;
use presence_analyzer::handlers::{api_v1, pages};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();
    let bind_addr = config.bind_addr.clone();

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(config.clone()))
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Root redirect + chart pages
            .route("/", web::get().to(pages::index))
            .route("/presence_weekday.html", web::get().to(pages::presence_weekday))
            .route("/presence_mean_time.html", web::get().to(pages::presence_mean_time))
            .route("/presence_start_end.html", web::get().to(pages::presence_start_end))
            // JSON API consumed by the chart pages
            .service(web::scope("/api/v1").configure(api_v1::configure))
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
