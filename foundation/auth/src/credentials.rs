use serde::Deserialize;
use tokio::fs;

use crate::error::Error;

/// Service account key document as downloaded from the Cloud Console.
#[derive(Deserialize, Clone, PartialEq)]
pub struct CredentialsFile {
    /// Missing in documents that are not credentials at all, see [`crate::create_token_source_from_credentials`].
    #[serde(rename(deserialize = "type"), default)]
    pub tp: String,

    pub client_email: Option<String>,
    pub private_key_id: Option<String>,
    pub private_key: Option<String>,
    pub auth_uri: Option<String>,
    pub token_uri: Option<String>,
    pub project_id: Option<String>,
    pub client_id: Option<String>,
    pub universe_domain: Option<String>,
}

// Possible sensitive info in debug messages
impl std::fmt::Debug for CredentialsFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsFile")
            .field("type", &self.tp)
            .field("client_email", &self.client_email)
            .field("project_id", &self.project_id)
            .finish()
    }
}

impl CredentialsFile {
    pub async fn new_from_file(filepath: impl AsRef<std::path::Path>) -> Result<Self, Error> {
        let credentials_json = fs::read(filepath).await?;
        Ok(serde_json::from_slice(credentials_json.as_slice())?)
    }

    pub fn new_from_str(str: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(str)?)
    }

    pub(crate) fn try_to_private_key(&self) -> Result<jsonwebtoken::EncodingKey, Error> {
        match self.private_key.as_ref() {
            Some(key) => Ok(jsonwebtoken::EncodingKey::from_rsa_pem(key.as_bytes())?),
            None => Err(Error::NoPrivateKeyFound),
        }
    }
}
