use mailchimp_signup::{
    configuration::get_configuration,
    domain::FieldMappingConfig,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;
use reqwest::{Client, Response};
use std::net::SocketAddr;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let name = "test";
    let default_env_filter = "info";
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(name.into(), default_env_filter.into(), std::io::stdout);
        init_subscriber(subscriber).expect("Failed to init subscriber");
    } else {
        let subscriber = get_subscriber(name.into(), default_env_filter.into(), std::io::sink);
        init_subscriber(subscriber).expect("Failed to init subscriber");
    }
});

static FAILED_TO_EXECUTE_REQUEST: &str = "Failed to execute request";

pub const SIGNUP_FIELD: &str = "Signup";

pub struct TestApp {
    pub address: SocketAddr,
    pub mailchimp_server: MockServer,
    client: Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(mapping()).await
    }

    pub async fn spawn_with(mapping: FieldMappingConfig) -> Self {
        Lazy::force(&TRACING);

        let mailchimp_server = MockServer::start().await;

        let mut config = get_configuration().expect("Failed to read configuration");
        config.application.port = 0;
        config.mailchimp.base_url = Some(mailchimp_server.uri());
        config.mailchimp.timeout_milliseconds = 200;
        config.signup_field.name = SIGNUP_FIELD.into();
        config.signup_field.mapping = mapping;

        let app = Application::build(config)
            .await
            .expect("Failed to build application");
        let address = app.local_addr();

        tokio::spawn(app.run_until_stopped());

        Self {
            address,
            mailchimp_server,
            client: Client::new(),
        }
    }

    pub async fn get_health_check(&self) -> Response {
        self.client
            .get(self.url("/health_check"))
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn post_submission(&self, body: &str) -> Response {
        self.client
            .post(self.url("/submissions"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body.to_string())
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn get_lists(&self) -> Response {
        self.client
            .get(self.url("/lists"))
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("http://{}{endpoint}", self.address)
    }
}

pub fn mapping() -> FieldMappingConfig {
    FieldMappingConfig {
        list_id: Some("L1".into()),
        email_field: Some("Email".into()),
        first_name_field: Some("First".into()),
        ..Default::default()
    }
}
