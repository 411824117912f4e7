//! # Platform API Client
//!
//! This module talks to the group endpoints of a GitLab-style REST API (v4).
//! It is built around the [`GroupApi`] trait so the traversal logic can be
//! exercised against in-memory hierarchies in tests, while [`ApiClient`]
//! performs the real, blocking HTTPS requests.
//!
//! ## Endpoints
//!
//! | Call                          | Request                                        | Shape  |
//! |-------------------------------|------------------------------------------------|--------|
//! | `fetch_group`                 | `GET {base}/groups/{id}`                       | object |
//! | `fetch_subgroups`             | `GET {base}/groups/{id}/subgroups`             | array  |
//! | `fetch_projects`              | `GET {base}/groups/{id}/projects`              | array  |
//! | `fetch_registry_repositories` | `GET {base}/groups/{id}/registry/repositories/`| array  |
//!
//! ## Failure containment
//!
//! The `fetch_*` methods always report failures. The listing calls also come
//! in a contained flavour (`subgroups`, `projects`, `registry_repositories`)
//! that logs the failure and yields an empty list instead.

use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::header;
use serde::de::DeserializeOwned;
use url::Url;

use crate::defaults::USER_AGENT;
use crate::error::{status_error, Error, Result};
use crate::item::{GroupId, Item};

/// The four group endpoints the tool reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Group,
    Subgroups,
    Projects,
    RegistryRepositories,
}

impl Endpoint {
    /// The request path relative to the API base URL.
    pub fn path(self, id: GroupId) -> String {
        match self {
            Endpoint::Group => format!("/groups/{}", id),
            Endpoint::Subgroups => format!("/groups/{}/subgroups", id),
            Endpoint::Projects => format!("/groups/{}/projects", id),
            Endpoint::RegistryRepositories => format!("/groups/{}/registry/repositories/", id),
        }
    }

    /// Human-readable name used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            Endpoint::Group => "group",
            Endpoint::Subgroups => "subgroups",
            Endpoint::Projects => "projects",
            Endpoint::RegistryRepositories => "registry repositories",
        }
    }
}

/// Read access to the group endpoints - allows mocking in tests
pub trait GroupApi {
    /// Fetches the group's own detail record.
    fn fetch_group(&self, id: GroupId) -> Result<Item>;

    /// Fetches the direct subgroups of a group.
    fn fetch_subgroups(&self, id: GroupId) -> Result<Vec<Item>>;

    /// Fetches the projects directly under a group.
    fn fetch_projects(&self, id: GroupId) -> Result<Vec<Item>>;

    /// Fetches the container registry repositories of a group.
    fn fetch_registry_repositories(&self, id: GroupId) -> Result<Vec<Item>>;

    /// Direct subgroups, or an empty list if the listing failed.
    fn subgroups(&self, id: GroupId) -> Vec<Item> {
        contain(self.fetch_subgroups(id), Endpoint::Subgroups, id)
    }

    /// Direct projects, or an empty list if the listing failed.
    fn projects(&self, id: GroupId) -> Vec<Item> {
        contain(self.fetch_projects(id), Endpoint::Projects, id)
    }

    /// Registry repositories, or an empty list if the listing failed.
    fn registry_repositories(&self, id: GroupId) -> Vec<Item> {
        contain(
            self.fetch_registry_repositories(id),
            Endpoint::RegistryRepositories,
            id,
        )
    }
}

fn contain(result: Result<Vec<Item>>, endpoint: Endpoint, id: GroupId) -> Vec<Item> {
    match result {
        Ok(items) => items,
        Err(e) => {
            warn!(
                "Could not list {} of group {}, skipping: {}",
                endpoint.describe(),
                id,
                e
            );
            Vec::new()
        }
    }
}

/// Blocking HTTP implementation of [`GroupApi`].
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    /// Creates a client for the API rooted at `base_url`
    /// (for example `https://gitlab.example.com/api/v4`).
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self> {
        Url::parse(base_url)?;

        let http = Client::builder()
            .build()
            .map_err(|e| Error::HttpClient {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: base_url.strip_suffix('/').unwrap_or(base_url).to_string(),
            token: token.into(),
        })
    }

    /// The full URL for an endpoint of the given group.
    pub fn url(&self, endpoint: Endpoint, id: GroupId) -> String {
        format!("{}{}", self.base_url, endpoint.path(id))
    }

    fn get<T: DeserializeOwned>(&self, endpoint: Endpoint, id: GroupId) -> Result<T> {
        let url = self.url(endpoint, id);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .bearer_auth(&self.token)
            .send()
            .map_err(|e| Error::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        if let Some(error) = status_error(response.status().as_u16(), &url) {
            return Err(error);
        }

        let body = response.text().map_err(|e| Error::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        if body.trim().is_empty() {
            return Err(Error::MissingBody { url });
        }

        serde_json::from_str(&body).map_err(|e| Error::Decode {
            url,
            message: e.to_string(),
        })
    }
}

impl GroupApi for ApiClient {
    fn fetch_group(&self, id: GroupId) -> Result<Item> {
        self.get(Endpoint::Group, id)
    }

    fn fetch_subgroups(&self, id: GroupId) -> Result<Vec<Item>> {
        self.get(Endpoint::Subgroups, id)
    }

    fn fetch_projects(&self, id: GroupId) -> Result<Vec<Item>> {
        self.get(Endpoint::Projects, id)
    }

    fn fetch_registry_repositories(&self, id: GroupId) -> Result<Vec<Item>> {
        self.get(Endpoint::RegistryRepositories, id)
    }
}
