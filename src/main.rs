use actix_web::{middleware::Logger, web, App, HttpServer};

use study_buddy::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let bind = (config.web_server_host.clone(), config.web_server_port);

    match AppState::new(config) {
        Ok(state) => {
            log::info!(
                "starting HTTP server on http://{}:{} (model {})",
                bind.0,
                bind.1,
                state.config.openai_model
            );
            let data = web::Data::new(state);
            HttpServer::new(move || {
                App::new()
                    .app_data(data.clone())
                    .wrap(Logger::default())
                    .configure(handlers::configure)
            })
            .bind(bind)?
            .run()
            .await
        }
        Err(err) => {
            log::error!("{}", err);
            log::warn!("starting HTTP server on http://{}:{} in locked mode", bind.0, bind.1);
            HttpServer::new(|| {
                App::new()
                    .wrap(Logger::default())
                    .configure(handlers::configure_locked)
            })
            .bind(bind)?
            .run()
            .await
        }
    }
}
