use std::time::Duration;
use tracing::{info, Instrument};
use crate::app_system::{AppConfig, AppError};
use crate::clients::{TodoClient, UserClient};
use crate::domain::{Bounds, CompletionRecord};
use crate::pipeline::generate_report;
use crate::resource_framework::ResourceClient;

const USER_AGENT: &str = "fancode-tasks";

/// Wires the resource clients to the pipeline for one report run.
///
/// Both clients share a single `reqwest::Client`.
pub struct ReportSystem {
    pub user_client: UserClient,
    pub todo_client: TodoClient,
    bounds: Bounds,
    threshold: f64,
}

impl ReportSystem {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(AppError::HttpClient)?;

        let user_client = UserClient::new(ResourceClient::new(http.clone(), config.base_url.as_str()));
        let todo_client = TodoClient::new(ResourceClient::new(http, config.base_url.as_str()));

        Ok(Self {
            user_client,
            todo_client,
            bounds: config.bounds,
            threshold: config.threshold,
        })
    }

    /// Fetch users and todos, then run the pipeline.
    ///
    /// The two requests go out together; the first failure ends the run with no partial result.
    pub async fn run(&self) -> Result<Vec<CompletionRecord>, AppError> {
        let span = tracing::info_span!("fetch");
        let (users, todos) = async {
            tokio::try_join!(self.user_client.fetch_users(), self.todo_client.fetch_todos())
        }
        .instrument(span)
        .await?;

        info!(users = users.len(), todos = todos.len(), "Source data fetched");

        let _span = tracing::info_span!("pipeline").entered();
        Ok(generate_report(&users, &todos, &self.bounds, self.threshold))
    }
}
