use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::info;

use homeservices_api::config::AppConfig;
use homeservices_api::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()))?;
    info!(
        "Starting pricing API on {}:{} ({})",
        config.host, config.port, config.environment
    );

    let bind = (config.host.clone(), config.port);
    let data = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(data.cors())
            .app_data(data.clone())
            .app_data(routes::json_config(data.json_limit_bytes))
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await
}
