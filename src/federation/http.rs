//! Federation runtime that resolves remotes over HTTP.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::manifest::RemoteManifest;
use super::module::RemoteModule;
use super::runtime::{FederationError, FederationRuntime};

/// Where a remote publishes its manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoteEndpoint {
    /// Remote name used as the module path prefix (e.g. `remoteToast`).
    pub name: String,
    /// Full URL of the remote's manifest.
    pub manifest_url: String,
}

/// Split `remote/Expose` into the remote name and the `./Expose` key.
///
/// Only the first `/` separates the remote; deeper paths stay in the key.
pub fn split_module_path(module_path: &str) -> Result<(&str, String), FederationError> {
    match module_path.split_once('/') {
        Some((remote, expose)) if !remote.is_empty() && !expose.is_empty() => {
            Ok((remote, format!("./{}", expose)))
        }
        _ => Err(FederationError::InvalidPath {
            path: module_path.to_string(),
        }),
    }
}

/// Runtime that fetches remote manifests with `reqwest`.
///
/// Every `load_remote` call fetches the manifest again; nothing is cached.
pub struct HttpFederation {
    client: reqwest::Client,
    remotes: BTreeMap<String, String>,
}

impl HttpFederation {
    pub fn new(remotes: impl IntoIterator<Item = RemoteEndpoint>) -> Self {
        // Per-attempt timeouts are enforced by the loader; this only bounds
        // a stuck connect.
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self::with_client(client, remotes)
    }

    pub fn with_client(
        client: reqwest::Client,
        remotes: impl IntoIterator<Item = RemoteEndpoint>,
    ) -> Self {
        let remotes = remotes
            .into_iter()
            .map(|remote| (remote.name, remote.manifest_url))
            .collect();
        Self { client, remotes }
    }

    pub fn remote_names(&self) -> impl Iterator<Item = &str> {
        self.remotes.keys().map(String::as_str)
    }

    async fn fetch_manifest(&self, url: &str) -> Result<RemoteManifest, FederationError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FederationError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FederationError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<RemoteManifest>()
            .await
            .map_err(|e| FederationError::Manifest {
                url: url.to_string(),
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl FederationRuntime for HttpFederation {
    fn name(&self) -> &str {
        "http"
    }

    async fn load_remote(&self, module_path: &str) -> Result<RemoteModule, FederationError> {
        let (remote, expose) = split_module_path(module_path)?;
        let url = self
            .remotes
            .get(remote)
            .ok_or_else(|| FederationError::UnknownRemote {
                remote: remote.to_string(),
            })?;

        tracing::debug!(remote, expose = %expose, url = %url, "Fetching remote manifest");
        let manifest = self.fetch_manifest(url).await?;

        let exposed = manifest
            .expose(&expose)
            .ok_or_else(|| FederationError::ExposeNotFound {
                remote: remote.to_string(),
                expose: expose.clone(),
            })?;

        exposed.to_module().map_err(|e| FederationError::Manifest {
            url: url.clone(),
            message: e.to_string(),
        })
    }
}
