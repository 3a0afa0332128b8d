use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::analysis::AnalysisReport;
use shared::client::{AnalysisRunAck, HealthStatus};
use shared::dashboard::DashboardSnapshot;
use shared::evaluation::Employee;
use shared::workers::{CreateWorkerRequest, UpdateWorkerRequest, WorkerRecord, WriteAck};
use shared::{ApiConfig, ApiError, Endpoint, Method, WorkforceApi};

/// `WorkforceApi` over the browser `fetch` API.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpBackend {
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    fn request(&self, method: Method, endpoint: &Endpoint) -> RequestBuilder {
        let url = self.config.url(endpoint);
        match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: Endpoint,
    ) -> Result<T, ApiError> {
        let request = self
            .request(method, &endpoint)
            .build()
            .map_err(ApiError::network)?;
        self.dispatch(method, endpoint, request).await
    }

    async fn call_with_body<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .request(method, &endpoint)
            .json(body)
            .map_err(ApiError::network)?;
        self.dispatch(method, endpoint, request).await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: Endpoint,
        request: Request,
    ) -> Result<T, ApiError> {
        log::debug!("{} {}", method, endpoint.path());
        let response = request.send().await.map_err(|err| {
            log::error!("❌ {} {} failed: {}", method, endpoint.path(), err);
            ApiError::network(err)
        })?;

        let body = response.text().await.map_err(ApiError::network)?;
        if !response.ok() {
            log::error!(
                "❌ {} {} returned {}",
                method,
                endpoint.path(),
                response.status()
            );
            return Err(ApiError::Status {
                status: response.status(),
                body,
            });
        }

        // Parsed from text so object keys keep the order the server sent.
        Ok(serde_json::from_str(&body)?)
    }
}

impl WorkforceApi for HttpBackend {
    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.call(Method::Get, Endpoint::Health).await
    }

    async fn dashboard(&self) -> Result<DashboardSnapshot, ApiError> {
        self.call(Method::Get, Endpoint::Dashboard).await
    }

    async fn run_manufacturing_analysis(&self) -> Result<DashboardSnapshot, ApiError> {
        self.call(Method::Post, Endpoint::RunManufacturingAnalysis)
            .await
    }

    async fn analysis(&self) -> Result<AnalysisReport, ApiError> {
        self.call(Method::Get, Endpoint::Analysis).await
    }

    async fn run_analysis(&self) -> Result<AnalysisRunAck, ApiError> {
        self.call(Method::Post, Endpoint::RunAnalysis).await
    }

    async fn list_workers(&self) -> Result<Vec<WorkerRecord>, ApiError> {
        self.call(Method::Get, Endpoint::Workers).await
    }

    async fn create_worker(&self, request: &CreateWorkerRequest) -> Result<WriteAck, ApiError> {
        self.call_with_body(Method::Post, Endpoint::Workers, request)
            .await
    }

    async fn update_worker(
        &self,
        id: i64,
        request: &UpdateWorkerRequest,
    ) -> Result<WriteAck, ApiError> {
        self.call_with_body(Method::Put, Endpoint::Worker(id), request)
            .await
    }

    async fn delete_worker(&self, id: i64) -> Result<WriteAck, ApiError> {
        self.call(Method::Delete, Endpoint::Worker(id)).await
    }

    async fn evaluation_list(&self) -> Result<Vec<Employee>, ApiError> {
        self.call(Method::Get, Endpoint::EvaluationList).await
    }
}
