use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use mb_core::services::auth::AuthService;
use mb_core::services::session::SessionService;
use mb_core::services::verification::{VerificationConfig, VerificationService};
use mb_infra::cache::{RedisClient, RedisCodeStore, RedisSessionStore};
use mb_infra::captcha::JpegCaptcha;
use mb_infra::sms::SmsProvider;
use mb_infra::users::InMemoryUserRepository;
use mb_shared::config::{CacheConfig, ServerConfig, SessionConfig};

use mb_api::routes::users::AppState;
use mb_api::{app, middleware};

type Auth = AuthService<
    InMemoryUserRepository,
    SmsProvider,
    RedisCodeStore,
    JpegCaptcha,
    RedisSessionStore,
>;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("starting miniblog auth service");

    let server_config = ServerConfig::from_env();
    let cache_config = CacheConfig::from_env();
    let session_config = SessionConfig::from_env();

    let redis = RedisClient::new(cache_config)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let code_store = Arc::new(RedisCodeStore::new(redis.clone()));
    let session_store = Arc::new(RedisSessionStore::new(redis));
    let captcha = Arc::new(JpegCaptcha::default());
    let sms_gateway = Arc::new(SmsProvider::from_env());
    let users = Arc::new(InMemoryUserRepository::new());

    let verification = Arc::new(VerificationService::new(
        sms_gateway,
        code_store,
        captcha,
        VerificationConfig::default(),
    ));
    let sessions = Arc::new(SessionService::new(session_store, session_config));
    let auth: Arc<Auth> = Arc::new(AuthService::new(users, verification.clone(), sessions));

    let state = web::Data::new(AppState {
        auth,
        verification,
    });

    let bind_address = server_config.bind_address();
    info!("listening on {}", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(middleware::cors::create_cors())
            .app_data(state.clone())
            .configure(
                app::configure::<
                    InMemoryUserRepository,
                    SmsProvider,
                    RedisCodeStore,
                    JpegCaptcha,
                    RedisSessionStore,
                >,
            )
    });

    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }

    server.bind(&bind_address)?.run().await
}
