use std::fmt;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Put => write!(f, "PUT"),
            Method::Delete => write!(f, "DELETE"),
        }
    }
}

/// Backend routes the dashboard talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Health,
    Dashboard,
    RunManufacturingAnalysis,
    Analysis,
    RunAnalysis,
    Workers,
    Worker(i64),
    EvaluationList,
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Health => "/health".to_string(),
            Endpoint::Dashboard => "/ai-manufacturing/dashboard".to_string(),
            Endpoint::RunManufacturingAnalysis => "/ai-manufacturing/analyze".to_string(),
            Endpoint::Analysis => "/analysis".to_string(),
            Endpoint::RunAnalysis => "/analysis/run".to_string(),
            Endpoint::Workers => "/workers".to_string(),
            Endpoint::Worker(id) => format!("/workers/{}", id),
            Endpoint::EvaluationList => "/workers/evaluation/list".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self {
            base_url: trimmed.to_string(),
        }
    }

    /// First non-blank candidate wins, otherwise the local development backend.
    pub fn resolve<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        candidates
            .into_iter()
            .flatten()
            .find(|candidate| !candidate.trim().is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(
            config.url(&Endpoint::Dashboard),
            "http://localhost:8000/ai-manufacturing/dashboard"
        );
    }

    #[test]
    fn trailing_slashes_are_dropped() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(config.url(&Endpoint::Worker(42)), "https://api.example.com/workers/42");
    }

    #[test]
    fn resolve_skips_missing_and_blank_values() {
        let config = ApiConfig::resolve([None, Some("  "), Some("http://10.0.0.5:8000")]);
        assert_eq!(config.base_url(), "http://10.0.0.5:8000");

        let fallback = ApiConfig::resolve([None, None]);
        assert_eq!(fallback, ApiConfig::default());
    }

    #[test]
    fn evaluation_list_path() {
        assert_eq!(Endpoint::EvaluationList.path(), "/workers/evaluation/list");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }
}
