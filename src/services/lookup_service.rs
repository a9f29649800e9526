use crate::error::ClientResult;
use crate::models::{ApiEnvelope, LookupItem, LookupKind, RawLookupItem};
use crate::services::api_client::ApiClient;

/// Reference data endpoints (`/types`, `/locations`, `/statuses`)
#[derive(Clone)]
pub struct LookupService {
    api: ApiClient,
}

impl LookupService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch one collection, normalized to `LookupItem`. A null `content` reads as empty.
    pub async fn fetch(&self, kind: LookupKind) -> ClientResult<Vec<LookupItem>> {
        self.fetch_raw(kind).await.map_err(|e| {
            log::error!("❌ {}: {}", kind.failure_message(), e);
            e.context(kind.failure_message())
        })
    }

    async fn fetch_raw(&self, kind: LookupKind) -> ClientResult<Vec<LookupItem>> {
        let envelope: ApiEnvelope<Vec<RawLookupItem>> =
            self.api.get(kind.endpoint(), Vec::new()).await?;
        let raw = envelope.into_optional_content("unexpected response code")?;
        Ok(raw
            .unwrap_or_default()
            .into_iter()
            .map(LookupItem::from)
            .collect())
    }

    pub async fn get_types(&self) -> ClientResult<Vec<LookupItem>> {
        self.fetch(LookupKind::Types).await
    }

    pub async fn get_locations(&self) -> ClientResult<Vec<LookupItem>> {
        self.fetch(LookupKind::Locations).await
    }

    pub async fn get_statuses(&self) -> ClientResult<Vec<LookupItem>> {
        self.fetch(LookupKind::Statuses).await
    }

    /// Backend health check against `/test`
    pub async fn test_connection(&self) -> bool {
        match self
            .api
            .get::<ApiEnvelope<serde_json::Value>>("/test", Vec::new())
            .await
        {
            Ok(envelope) => envelope.is_success(),
            Err(e) => {
                log::warn!("⚠️ Backend connection test failed: {}", e);
                false
            }
        }
    }
}
