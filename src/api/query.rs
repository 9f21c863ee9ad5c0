use crate::api::error::ApiError;
use crate::api::types::envelope::ResponseEnvelope;
use crate::api::ApiClient;
use log::{debug, error, warn};
use serde_json::Value;

impl ApiClient {
    /// GET `path` and return the decoded JSON body
    ///
    /// Any status other than 2xx is an error carrying the response text.
    pub async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url_for(path)?;
        debug!("GET {}", url);
        match self.get_client(url.clone()).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    let text = response.text().await?;
                    match serde_json::from_str::<Value>(&text) {
                        Ok(body) => Ok(body),
                        Err(e) => {
                            error!("{:?}", e);
                            debug!("{}", text);
                            Err(ApiError::Decode(format!("{}: {}", url, e)))
                        }
                    }
                } else {
                    let text = response.text().await.unwrap_or_default();
                    warn!("{} result: {}", status, text);
                    Err(ApiError::Status(status.as_u16(), text))
                }
            }
            Err(e) => {
                error!("{:?}", e);
                Err(e.into())
            }
        }
    }

    /// GET `path` and view it through the pagination envelope
    pub async fn get_page(&self, path: &str) -> Result<ResponseEnvelope, ApiError> {
        let body = self.get_json(path).await?;
        Ok(ResponseEnvelope::from_body(&body))
    }

    /// Fetch `/health`
    pub async fn health(&self) -> Result<Value, ApiError> {
        self.get_json("/health").await
    }
}
