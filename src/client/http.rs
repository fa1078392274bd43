use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::client::OrderApi;
use crate::entities::order::{OrderAction, OrderDetail};
use crate::entities::profile::UpdateProfile;
use crate::entities::query::{OrderQueryKey, OrderQueryResult};
use crate::errors::ClientError;

/// [`OrderApi`] over HTTP. Paths are resolved relative to `base_url`.
#[derive(Debug, Clone)]
pub struct HttpOrderApi {
    http: Client,
    base_url: Url,
}

impl HttpOrderApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Transport)?;
        Self::with_client(http, base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

async fn check(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    check(resp).await?.json::<T>().await.map_err(ClientError::Decode)
}

#[async_trait]
impl OrderApi for HttpOrderApi {
    #[instrument(skip(self), err)]
    async fn get_orders(&self, query: &OrderQueryKey) -> Result<OrderQueryResult, ClientError> {
        let url = self.endpoint(&["orders"])?;
        let resp = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        let result: OrderQueryResult = decode(resp).await?;
        debug!(count = result.orders.len(), total = result.meta.total_count, "fetched orders");
        Ok(result)
    }

    #[instrument(skip(self), err)]
    async fn get_order_details(&self, order_id: &str) -> Result<OrderDetail, ClientError> {
        let url = self.endpoint(&["orders", order_id])?;
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        decode(resp).await
    }

    #[instrument(skip(self, action), fields(action = %action), err)]
    async fn transition(&self, order_id: &str, action: OrderAction) -> Result<(), ClientError> {
        let url = self.endpoint(&["orders", order_id, action.as_str()])?;
        let resp = self
            .http
            .patch(url)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        check(resp).await?;
        Ok(())
    }

    #[instrument(skip(self, profile), err)]
    async fn update_profile(&self, profile: &UpdateProfile) -> Result<(), ClientError> {
        let url = self.endpoint(&["profile"])?;
        let resp = self
            .http
            .put(url)
            .json(profile)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        check(resp).await?;
        Ok(())
    }
}
