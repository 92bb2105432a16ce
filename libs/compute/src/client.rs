use std::str::FromStr;
use std::time::Duration;

use alloy::primitives::B256;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ComputeError;
use crate::handle::ComputeService;
use crate::mode::Mode;
use crate::model::{
    ApiErrorBody, ClaimTaskRequest, ClaimTaskResponse, InputResponse, ResultPayload,
    SubmitResultRequest, SubmitResultResponse, TextRequest, TranslationResponse,
};

pub const API_KEY_HEADER: &str = "X-API-KEY";

/// JSON-over-HTTP client for the compute service.
#[derive(Clone)]
pub struct ComputeClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ComputeClient {
    /// Every request made by this client is bounded by `timeout`.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ComputeError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probes `GET /health`.
    pub async fn health(&self) -> Result<(), ComputeError> {
        let _: serde_json::Value = self.send_json(self.http.get(self.url("/health"))).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ComputeError> {
        let request = match &self.api_key {
            Some(api_key) => request.header(API_KEY_HEADER, api_key),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body: ApiErrorBody = response.json().await.unwrap_or_default();
            let message = body
                .message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| status.to_string());
            return Err(ComputeError::Api {
                status: status.as_u16(),
                code: body.code.filter(|code| !code.is_empty()),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl ComputeService for ComputeClient {
    async fn claim_task(&self, request: &ClaimTaskRequest) -> Result<ClaimTaskResponse, ComputeError> {
        self.send_json(self.http.post(self.url("/tasks/claim")).json(request)).await
    }

    async fn get_input(&self, input_hash: B256) -> Result<InputResponse, ComputeError> {
        self.send_json(self.http.get(self.url(&format!("/tasks/input/{input_hash}")))).await
    }

    async fn run_model(
        &self,
        mode: Mode,
        text: &str,
        include_grammar: bool,
    ) -> Result<TranslationResponse, ComputeError> {
        let request = TextRequest { text: text.to_string(), include_grammar };
        self.send_json(self.http.post(self.url(mode.path())).json(&request)).await
    }

    async fn submit_result(&self, task_id: u64, payload: &ResultPayload) -> Result<B256, ComputeError> {
        let request = SubmitResultRequest { result_payload: payload.clone() };
        let response: SubmitResultResponse = self
            .send_json(self.http.post(self.url(&format!("/tasks/{task_id}/result"))).json(&request))
            .await?;

        tracing::debug!("Result stored for task {task_id}: status={}", response.status);

        B256::from_str(&response.result_hash)
            .map_err(|_| ComputeError::InvalidResultHash(response.result_hash))
    }
}
