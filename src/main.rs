use actix_files::Files;
use actix_web::{App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use loop_golf::args;
use loop_golf::controller::scorecard::{configure, new_shared_scorecard};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = args::args_checks();
    let session = new_shared_scorecard(&args.player_name);
    let static_dir = args.static_dir.clone();

    info!(
        host = %args.host,
        port = args.port,
        player = %args.player_name,
        "starting scorecard server"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(session.clone())
            .configure(configure)
            .service(Files::new("/static", &static_dir))
    })
    .bind(args.bind_addr())?
    .run()
    .await?;
    Ok(())
}
