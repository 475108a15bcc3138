use serde_json::Value;
use stepup_adapters::config::{AllowedOrigins, test};
use stepup_core::StepUpPolicy;
use stepup_service::StepUpService;
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_policy(StepUpPolicy::default(), None).await
    }

    pub async fn with_policy(
        policy: StepUpPolicy,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Self {
        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let service = StepUpService::new(policy);
        tokio::spawn(service.run_standalone(listener, allowed_origins));

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn get_step_up(&self, query: &[(&str, &str)]) -> reqwest::Response {
        self.http_client
            .get(format!("{}/step-up", &self.address))
            .query(query)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_rule(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/rules/step-up", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
