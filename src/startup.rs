use crate::configuration::{DatabaseSettings, MailSettings, Settings};
use crate::email_client::EmailClient;
use crate::routes::{contact_form, health_check, submit_contact};
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let email_client = EmailClient::new(
            config.email_client.base_url.clone(),
            config.email_client.auth_token.clone(),
            config.email_client.timeout(),
        );

        let address = format!("{}:{}", config.app.host, config.app.port);
        let connection_pool = get_connection_pull(&config.database);

        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr().unwrap().port();
        let server = run(listener, connection_pool, email_client, config.mail)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    email_client: EmailClient,
    mail_settings: MailSettings,
) -> Result<Server, anyhow::Error> {
    let db_pool = web::Data::new(db_pool);
    let email_client = web::Data::new(email_client);
    let mail_settings = web::Data::new(mail_settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/contact", web::get().to(contact_form))
            .route("/contact", web::post().to(submit_contact))
            .app_data(db_pool.clone())
            .app_data(email_client.clone())
            .app_data(mail_settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

pub fn get_connection_pull(db_config: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy_with(db_config.with_db())
}
