use serde::Deserialize;

/// `GET /identity`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub machine_identifier: Option<String>,
    pub version: Option<String>,
    pub claimed: Option<String>,
}
