use serde::{Deserialize, Serialize};

use crate::{config::Config, error::FirelinkError};

// Firebase Dynamic Links REST endpoint; the API key travels as a query
// parameter.
const ENDPOINT: &str = "https://firebasedynamiclinks.googleapis.com/v1/shortLinks";

/// Social preview metadata attached to a dynamic link.  Fields left unset
/// are omitted from the payload rather than sent as empty strings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMetaTagInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_image_link: Option<String>,
}

impl SocialMetaTagInfo {
    // Returns None when no social field is set, so the whole object
    // disappears from the serialized payload.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        image_link: Option<String>,
    ) -> Option<Self> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
        let info = Self {
            social_title: non_empty(title),
            social_description: non_empty(description),
            social_image_link: non_empty(image_link),
        };
        if info.social_title.is_none()
            && info.social_description.is_none()
            && info.social_image_link.is_none()
        {
            return None;
        }
        Some(info)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DynamicLinkInfo {
    domain_uri_prefix: String,
    link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    social_meta_tag_info: Option<SocialMetaTagInfo>,
}

#[derive(Debug, Serialize)]
struct Suffix {
    option: &'static str,
}

/// Payload for one shortening call.  Built fresh per invocation and
/// immutable once sent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    dynamic_link_info: DynamicLinkInfo,
    suffix: Suffix,
}

impl ShortenRequest {
    pub fn new(domain_uri_prefix: &str, link: &str, social: Option<SocialMetaTagInfo>) -> Self {
        Self {
            dynamic_link_info: DynamicLinkInfo {
                domain_uri_prefix: domain_uri_prefix.to_string(),
                link: link.to_string(),
                social_meta_tag_info: social,
            },
            suffix: Suffix { option: "SHORT" },
        }
    }
}

/// Structured error returned by the link service.
#[derive(Debug, Default, Deserialize, derive_more::Display)]
#[serde(default)]
#[display("{status} ({code}): {message}")]
pub struct ApiError {
    pub code: i64,
    pub message: String,
    pub status: String,
}

// The service answers with exactly one of `shortLink` or `error`; a body
// populating neither arm fails to deserialize.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ShortenResponse {
    Failure { error: ApiError },
    #[serde(rename_all = "camelCase")]
    Success { short_link: String },
}

// POST the request to the link service: a single attempt, no retries.
pub async fn shorten(config: &Config, request: &ShortenRequest) -> Result<String, FirelinkError> {
    let client = reqwest::Client::new();
    let response = client
        .post(ENDPOINT)
        .query(&[("key", config.web_api_key.as_str())])
        .json(request)
        .send()
        .await?;
    let body = response.text().await?;
    parse_response(&body)
}

fn parse_response(body: &str) -> Result<String, FirelinkError> {
    match serde_json::from_str(body)? {
        ShortenResponse::Failure { error } => Err(FirelinkError::Service(error)),
        ShortenResponse::Success { short_link } => Ok(short_link),
    }
}
