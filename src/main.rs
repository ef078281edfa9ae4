use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{web, App, HttpServer, middleware::{Logger, DefaultHeaders}, HttpResponse, Responder};
use campaign_hub::{
    config::Config,
    helper::{settings_helpers, templates},
    routes,
    setup::{db_setup, fixtures},
    AppState,
};
use clap::Parser;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use redb::Database;
use std::fs;
use std::path::PathBuf;

/// A simple handler for the root URL.
async fn root_handler() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain").body("OK")
}

#[derive(Parser, Debug)]
#[command(name = "campaign_hub_server", author, version, about = "Starts the campaign content hub API server.")]
struct Cli {
    /// Path to the .env configuration file.
    #[arg(long, required = true, value_name = "FILE")]
    env_file: PathBuf,
}

fn build_cors(allowed_origins: &str) -> Cors {
    let cors = if allowed_origins.trim() == "*" {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };
    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![header::CONTENT_DISPOSITION])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    // Load configuration first
    let config = Config::from_env(&cli.env_file)
        .expect("FATAL: Failed to load or parse configuration.");

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(&config.log_level));

    let tera = templates::build_tera().expect("FATAL: Failed to compile bundled templates.");

    let campaign_db_path = config.campaign_db_path();
    let library_db_path = config.library_db_path();
    for path in [&campaign_db_path, &library_db_path] {
        if let Some(parent_dir) = path.parent() {
            fs::create_dir_all(parent_dir)?;
        }
    }

    let library = Database::create(&library_db_path)
        .expect("FATAL: Failed to open library.db.");
    db_setup::setup_library_db(&library).expect("FATAL: Failed to prepare the message library tables.");

    let manager = SqliteConnectionManager::file(&campaign_db_path);
    let pool = Pool::builder()
        .build(manager)
        .expect("FATAL: Failed to create Rusqlite connection pool.");

    let initial_settings = {
        let mut conn = pool.get().expect("Failed to get DB connection for initial setup.");
        db_setup::setup_campaign_db(&mut conn).expect("FATAL: Failed to prepare the campaign tables.");
        if config.seed_fixtures {
            match fixtures::seed_empty_tables(&mut conn, &library) {
                Ok(report) => log::info!("Fixture seeding finished: {:?}", report),
                Err(e) => log::error!("Fixture seeding failed: {}", e),
            }
        }
        settings_helpers::load_settings(&conn).expect("FATAL: Failed to read campaign settings.")
    };

    let app_state = web::Data::new(AppState::new(initial_settings));
    let library_data = web::Data::new(library);
    let pool_data = web::Data::new(pool);
    let tera_data = web::Data::new(tera);
    let config_data = web::Data::new(config.clone());

    let server_address = format!("{}:{}", config.web.host, config.web.port);
    log::info!("Server starting at http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&config.allowed_origins))
            .wrap(Logger::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("X-Frame-Options", "DENY"))
            )
            .app_data(config_data.clone())
            .app_data(tera_data.clone())
            .app_data(library_data.clone())
            .app_data(pool_data.clone())
            .app_data(app_state.clone())
            .route("/", web::get().to(root_handler))
            .service(web::scope("/api").configure(routes::config_all))
    })
    .bind(server_address)?
    .run()
    .await
}
