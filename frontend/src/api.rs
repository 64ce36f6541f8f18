use gloo_net::http::{Request, Response};
use serde::Deserialize;
use web_sys::RequestCredentials;

use crate::error::{Result, TrackerError};
use crate::records::{RecordDraft, RecordKind};

/// Body every mutation endpoint answers with.
#[derive(Debug, Default, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: bool,
}

impl MutationResponse {
    pub fn into_result(self) -> Result<()> {
        if self.success {
            Ok(())
        } else {
            Err(TrackerError::Rejected)
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        ApiClient { base: base.into() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn delete_path(&self, path: &str) -> Result<()> {
        let resp = Request::delete(&self.url(path))
            .credentials(RequestCredentials::SameOrigin)
            .send()
            .await?;
        read_mutation(resp).await
    }

    pub async fn update_record(&self, kind: RecordKind, id: &str, draft: &RecordDraft) -> Result<()> {
        let resp = Request::post(&self.url(&kind.update_path(id)))
            .credentials(RequestCredentials::SameOrigin)
            .json(draft)?
            .send()
            .await?;
        read_mutation(resp).await
    }
}

/// The two record mutations the editor needs from the server.
pub(crate) trait Backend {
    async fn delete(&self, path: &str) -> Result<()>;
    async fn update(&self, kind: RecordKind, id: &str, draft: &RecordDraft) -> Result<()>;
}

impl Backend for ApiClient {
    async fn delete(&self, path: &str) -> Result<()> {
        self.delete_path(path).await
    }

    async fn update(&self, kind: RecordKind, id: &str, draft: &RecordDraft) -> Result<()> {
        self.update_record(kind, id, draft).await
    }
}

async fn read_mutation(resp: Response) -> Result<()> {
    if !resp.ok() {
        return Err(TrackerError::Status(resp.status()));
    }
    resp.json::<MutationResponse>().await?.into_result()
}
