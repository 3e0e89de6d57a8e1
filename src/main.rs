mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;

use std::io;
use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{info, warn};

use crate::config::Config;
use crate::services::{EmployeeService, InMemoryEmployeeService, PgEmployeeService};

async fn build_service(config: &Config) -> io::Result<Arc<dyn EmployeeService>> {
    match &config.database_url {
        Some(database_url) => {
            let pool = db::create_pool(database_url, config.max_connections)
                .await
                .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
            db::ensure_schema(&pool)
                .await
                .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

            info!("Using PostgreSQL employee storage");
            Ok(Arc::new(PgEmployeeService::new(pool)))
        }
        None => {
            warn!("DATABASE_URL not set, employees are kept in memory");
            Ok(Arc::new(InMemoryEmployeeService::new()))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config =
        Config::from_env().map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let service = web::Data::from(build_service(&config).await?);

    info!("Starting server at {}", config.bind_address());

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(handlers::routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
