use once_cell::sync::Lazy;
use registrant_contact::{
    configuration::{DatabaseSettings, Settings, get_configuration},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use sqlx::{Connection, Executor, PgConnection, PgPool, types::chrono::Utc};
use uuid::Uuid;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_contact(&self, query: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}/contact{}", self.address, query))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact(&self, query: &str, body: &[(&str, &str)]) -> reqwest::Response {
        self.api_client
            .post(format!("{}/contact{}", self.address, query))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn seed_domain(&self, sld: &str, tld: &str, email: &str, first: &str, last: &str) {
        sqlx::query(
            r#"
            INSERT INTO service_domain
                (id, sld, tld, contact_email, contact_first_name, contact_last_name, registered_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(sld)
        .bind(tld)
        .bind(email)
        .bind(first)
        .bind(last)
        .bind(Utc::now())
        .execute(&self.db_pool)
        .await
        .expect("Failed to seed a service_domain row.");
    }
}

pub async fn configure_database(config: &DatabaseSettings) -> PgPool {
    let mut connection = PgConnection::connect_with(&config.without_db())
        .await
        .expect("Failed to connect to Postgres");

    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.database_name).as_str())
        .await
        .expect("Failed to create database");

    let connection_pull = PgPool::connect_with(config.with_db())
        .await
        .expect("Failed to connect to Postgres");

    sqlx::migrate!("./migrations")
        .run(&connection_pull)
        .await
        .expect("Failed to migrate database");

    connection_pull
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_settings(|_| {}).await
}

pub async fn spawn_app_with_settings(customize: impl FnOnce(&mut Settings)) -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let mut config = get_configuration().expect("Failed to read configuration");
    config.database.database_name = Uuid::new_v4().to_string();
    config.app.port = 0;
    config.email_client.base_url = email_server.uri();
    customize(&mut config);

    let db_pool = configure_database(&config.database).await;

    let app = Application::build(config)
        .await
        .expect("Failed to build application.");
    let port = app.get_port();
    let _ = tokio::spawn(app.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{port}"),
        db_pool,
        email_server,
        api_client: reqwest::Client::new(),
    }
}
