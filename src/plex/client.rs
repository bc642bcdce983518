use log::{debug, error};
use reqwest::{blocking::Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use xmltree::Element;

use super::{
    models::{Identity, PlaylistMediaContainer},
    xml::parse_document,
};
use crate::{config::Config, error::PlexError};

/// A successful response, body not yet parsed.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

pub struct Plex {
    config: Config,
    http: Client,
}

impl Plex {
    pub fn new(config: Config) -> Result<Self, PlexError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(PlexError::Client)?;
        Ok(Self { config, http })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Transport failures and non-2xx statuses are logged once and returned as
    /// errors. The body of a failed response is never read.
    pub fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, PlexError> {
        let endpoint = if endpoint.starts_with('/') {
            endpoint.to_string()
        } else {
            format!("/{}", endpoint)
        };
        let url = format!("{}{}", self.config.base_url, endpoint);
        debug!("{} {}", method, url);

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header("X-Plex-Token", &self.config.token)
            .header("Accept", "application/xml");
        if !params.is_empty() {
            builder = builder.query(params);
        }

        let transport = |source: reqwest::Error| {
            error!("Error with {} request to {}: {}", method, endpoint, source);
            PlexError::Transport {
                method: method.clone(),
                endpoint: endpoint.clone(),
                source,
            }
        };

        let response = builder.send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            error!("Error with {} request to {}: HTTP {}", method, endpoint, status);
            return Err(PlexError::Status {
                method: method.clone(),
                endpoint: endpoint.clone(),
                status,
            });
        }

        let body = response.text().map_err(transport)?;
        Ok(ApiResponse { status, body })
    }

    pub fn get(&self, endpoint: &str) -> Result<ApiResponse, PlexError> {
        self.request(Method::GET, endpoint, &[])
    }

    pub fn post(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<ApiResponse, PlexError> {
        self.request(Method::POST, endpoint, params)
    }

    pub fn delete(&self, endpoint: &str) -> Result<ApiResponse, PlexError> {
        self.request(Method::DELETE, endpoint, &[])
    }

    pub fn get_xml(&self, endpoint: &str) -> Result<Element, PlexError> {
        let response = self.get(endpoint)?;
        parse_document(&response.body, endpoint)
    }

    pub fn decode<T: DeserializeOwned>(
        &self,
        response: &ApiResponse,
        context: &str,
    ) -> Result<T, PlexError> {
        serde_xml_rs::from_str(&response.body).map_err(|source| {
            error!("Error decoding response from {}: {}", context, source);
            PlexError::Decode {
                context: context.to_string(),
                source,
            }
        })
    }

    pub fn fetch_playlists(&self) -> Result<Element, PlexError> {
        self.get_xml("/playlists")
    }

    pub fn fetch_playlist_metadata(&self, rating_key: &str) -> Result<Element, PlexError> {
        self.get_xml(&format!("/playlists/{}", rating_key))
    }

    pub fn fetch_playlist_items(&self, rating_key: &str) -> Result<Element, PlexError> {
        self.get_xml(&format!("/playlists/{}/items", rating_key))
    }

    pub fn create_playlist(
        &self,
        title: &str,
        media_type: &str,
        uri: &str,
    ) -> Result<PlaylistMediaContainer, PlexError> {
        let response = self.post(
            "/playlists",
            &[("type", media_type), ("title", title), ("uri", uri)],
        )?;
        self.decode(&response, "/playlists")
    }

    pub fn identity(&self) -> Result<Identity, PlexError> {
        let response = self.get("/identity")?;
        self.decode(&response, "/identity")
    }
}
