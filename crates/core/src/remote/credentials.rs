use thiserror::Error;

use crate::remote::gcloud::CredentialHelper;
use crate::shared::constants::PROJECT_ENV_VARS;

/// A resolved authentication path for the remote API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthMethod {
    /// Direct API access with an explicit key.
    ApiKey(String),
    /// Vertex AI with an ADC access token.
    Vertex {
        access_token: String,
        project: String,
        region: String,
    },
}

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error(
        "no GCP project configured; set GOOGLE_CLOUD_PROJECT or run \
         'gcloud config set project PROJECT_ID'"
    )]
    MissingProject,
    #[error(
        "no authentication available; set GEMINI_API_KEY or run \
         'gcloud auth application-default login' for Vertex AI"
    )]
    MissingCredentials,
}

/// Pick an authentication path.
///
/// Order: explicit API key (unless Vertex is forced), then ADC via the
/// credential helper, then the API key again as a last resort. The Vertex
/// path needs a project id: the caller-supplied one (flag or env) first,
/// then the helper's configured default.
pub fn resolve_auth(
    api_key: Option<String>,
    force_vertex: bool,
    project: Option<String>,
    region: &str,
    helper: &dyn CredentialHelper,
) -> Result<AuthMethod, CredentialError> {
    if let Some(ref key) = api_key {
        if !force_vertex {
            return Ok(AuthMethod::ApiKey(key.clone()));
        }
    }

    if let Some(access_token) = helper.access_token() {
        let project = project
            .or_else(|| helper.project())
            .ok_or(CredentialError::MissingProject)?;
        return Ok(AuthMethod::Vertex {
            access_token,
            project,
            region: region.to_string(),
        });
    }

    // Vertex was requested (or no other choice) but ADC isn't available.
    if let Some(key) = api_key {
        return Ok(AuthMethod::ApiKey(key));
    }

    Err(CredentialError::MissingCredentials)
}

/// Project id from the conventional env vars, in precedence order.
pub fn project_from_env() -> Option<String> {
    project_from(|name| std::env::var(name).ok())
}

fn project_from(get: impl Fn(&str) -> Option<String>) -> Option<String> {
    PROJECT_ENV_VARS
        .iter()
        .find_map(|name| get(name).filter(|v| !v.is_empty()))
}
