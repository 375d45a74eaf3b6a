//! The one outbound read the listing performs.
//!
//! `Fetcher::fetch_users` never returns an error: every failure is logged
//! here and collapsed to `None`, and the listing treats that as "nothing to
//! show". `HttpFetcher::try_fetch_users` keeps the typed error for callers
//! that want it.

use tracing::{debug, error};

use crate::client::UserClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::User;

/// Source of the user collection.
pub trait Fetcher {
    fn fetch_users(&self) -> Option<Vec<User>>;
}

/// Fetches the collection over HTTP with a blocking `ureq` agent.
///
/// No retry and no timeout: the first failure is final for that call.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: UserClient,
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new(client: UserClient) -> Self {
        // Status codes are data for `UserClient::parse_list_users`, not
        // transport errors.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { client, agent }
    }

    pub fn client(&self) -> &UserClient {
        &self.client
    }

    pub fn try_fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let req = self.client.build_list_users();
        debug!(url = %req.path, "fetching users");
        let response = self.execute(req)?;
        self.client.parse_list_users(response)
    }

    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match req.method {
            HttpMethod::Get => self.agent.get(&req.path),
        };
        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_users(&self) -> Option<Vec<User>> {
        match self.try_fetch_users() {
            Ok(users) => {
                debug!(count = users.len(), "fetched users");
                Some(users)
            }
            Err(err) => {
                error!(error = %err, base_url = %self.client.base_url(), "API error");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_host_collapses_to_none() {
        // Port 1 on loopback refuses connections on any sane test host.
        let fetcher = HttpFetcher::new(UserClient::new("http://127.0.0.1:1"));
        assert!(fetcher.fetch_users().is_none());
        assert!(matches!(
            fetcher.try_fetch_users(),
            Err(ApiError::Transport(_))
        ));
    }
}
