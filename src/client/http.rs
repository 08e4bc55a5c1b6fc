use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::{
    client::{
        cache::{Query, QueryCache, QueryKey, QueryState},
        error::ClientError,
        mutation::MessageMutation,
    },
    contract::{self, Endpoint, HttpMethod, ListExperiences, ListProjects, ListSkills},
    entities::{experience::Experience, project::Project, skill::Skill},
};

/// Everything the page renders, fetched together.
#[derive(Debug, Clone)]
pub struct PortfolioData {
    pub projects: Arc<Vec<Project>>,
    pub skills: Arc<Vec<Skill>>,
    pub experiences: Arc<Vec<Experience>>,
}

/// Typed access to the portfolio API with a session-long read cache.
///
/// Cloning is cheap; clones share the HTTP connection pool and the cache.
#[derive(Clone)]
pub struct PortfolioClient {
    http: reqwest::Client,
    base_url: Url,
    cache: Arc<QueryCache>,
}

impl PortfolioClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        Ok(Self::with_http_client(reqwest::Client::new(), base_url))
    }

    /// `base_url` may carry a path prefix; a trailing slash is added so
    /// endpoint paths resolve beneath it.
    pub fn with_http_client(http: reqwest::Client, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        PortfolioClient {
            http,
            base_url,
            cache: Arc::new(QueryCache::new()),
        }
    }

    fn url_for<E: Endpoint>(&self) -> Result<Url, ClientError> {
        self.base_url
            .join(E::PATH.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {e}", self.base_url)))
    }

    /// Issues one request and parses the reply through the endpoint contract.
    pub async fn send<E: Endpoint>(&self, request: &E::Request) -> Result<E::Response, ClientError> {
        let url = self.url_for::<E>()?;
        debug!(method = ?E::METHOD, %url, "Sending API request");

        let builder = match E::METHOD {
            HttpMethod::Get => self.http.get(url),
            HttpMethod::Post => self.http.post(url).json(request),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        contract::parse_response::<E>(status, &body)
    }

    /// Returns the cached value for `Q`, fetching it on first use.
    pub async fn query<Q: Query>(&self) -> Result<Arc<Q::Response>, ClientError> {
        if let Some(data) = self.cache.get::<Q>() {
            return Ok(data);
        }

        self.cache.start_loading(Q::KEY);
        match self.send::<Q>(&()).await {
            Ok(response) => {
                let data = Arc::new(response);
                self.cache.store::<Q>(data.clone());
                Ok(data)
            }
            Err(e) => {
                self.cache.fail(Q::KEY, e.to_string());
                Err(e)
            }
        }
    }

    pub async fn projects(&self) -> Result<Arc<Vec<Project>>, ClientError> {
        self.query::<ListProjects>().await
    }

    pub async fn skills(&self) -> Result<Arc<Vec<Skill>>, ClientError> {
        self.query::<ListSkills>().await
    }

    pub async fn experiences(&self) -> Result<Arc<Vec<Experience>>, ClientError> {
        self.query::<ListExperiences>().await
    }

    /// Runs the three reads concurrently; they do not depend on each other.
    pub async fn load_all(&self) -> Result<PortfolioData, ClientError> {
        let (projects, skills, experiences) =
            futures::try_join!(self.projects(), self.skills(), self.experiences())?;

        Ok(PortfolioData { projects, skills, experiences })
    }

    pub fn query_state(&self, key: QueryKey) -> QueryState {
        self.cache.state(key)
    }

    /// A fresh contact form submission handle.
    pub fn message_mutation(&self) -> MessageMutation {
        MessageMutation::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::CreateMessage;

    #[test]
    fn rejects_unparseable_base_url() {
        assert!(matches!(PortfolioClient::new("not a url"), Err(ClientError::InvalidBaseUrl(_))));
    }

    #[test]
    fn builds_urls_from_contract_paths() {
        let client = PortfolioClient::new("http://127.0.0.1:8080/").unwrap();

        assert_eq!(client.url_for::<ListSkills>().unwrap().as_str(), "http://127.0.0.1:8080/skills");
        assert_eq!(client.url_for::<CreateMessage>().unwrap().as_str(), "http://127.0.0.1:8080/messages");
    }

    #[test]
    fn keeps_base_url_path_prefix() {
        for base in ["https://example.com/api/", "https://example.com/api"] {
            let client = PortfolioClient::new(base).unwrap();

            assert_eq!(client.url_for::<ListSkills>().unwrap().as_str(), "https://example.com/api/skills");
            assert_eq!(client.url_for::<CreateMessage>().unwrap().as_str(), "https://example.com/api/messages");
        }
    }

    #[actix_rt::test]
    async fn unreachable_server_records_error_state() {
        let client = PortfolioClient::new("http://127.0.0.1:9").unwrap();

        let err = client.projects().await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));

        let state = client.query_state(QueryKey::Projects);
        assert!(!state.is_loading);
        assert!(state.data.is_none());
        assert!(state.error.unwrap().starts_with("Network error"));
    }
}
