// REST bills store
//
// HTTP client for the bills API: GET /bills, POST /bills (multipart proof
// upload), PATCH /bills/{selector}. Response statuses are decoded into
// structured errors here, once; nothing downstream inspects message text.

use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use std::time::Duration;

use crate::config::StoreConfig;
use crate::core::{AppError, Result};
use crate::modules::bills::models::BillRecord;
use crate::modules::store::models::{
    CreateBillPayload, ProofFile, UpdateBillPayload, UploadReceipt,
};

use super::store_trait::BillsStore;

/// HTTP client for the remote bills store
pub struct RestBillsStore {
    client: Client,
    base_url: String,
}

impl RestBillsStore {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn bills_url(&self) -> String {
        format!("{}/bills", self.base_url)
    }

    async fn ensure_success(response: Response) -> Result<Response> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status, body = %body, "bills store rejected the call");
            return Err(AppError::api(status));
        }

        Ok(response)
    }
}

#[async_trait]
impl BillsStore for RestBillsStore {
    async fn list(&self) -> Result<Vec<BillRecord>> {
        let response = self
            .client
            .get(self.bills_url())
            .send()
            .await
            .map_err(|e| AppError::transport(format!("Bills list request failed: {}", e)))?;

        let response = Self::ensure_success(response).await?;

        let records: Vec<BillRecord> = response
            .json()
            .await
            .map_err(|e| AppError::decode(format!("Invalid bills payload: {}", e)))?;

        Ok(records)
    }

    async fn create(&self, payload: CreateBillPayload) -> Result<UploadReceipt> {
        let ProofFile {
            file_name,
            media_type,
            content,
        } = payload.file;

        let part = multipart::Part::bytes(content)
            .file_name(file_name)
            .mime_str(&media_type)
            .map_err(|e| AppError::validation(format!("Invalid media type: {}", e)))?;

        let form = multipart::Form::new()
            .part("file", part)
            .text("email", payload.email);

        let response = self
            .client
            .post(self.bills_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::transport(format!("Proof upload failed: {}", e)))?;

        let response = Self::ensure_success(response).await?;

        let receipt: UploadReceipt = response
            .json()
            .await
            .map_err(|e| AppError::decode(format!("Invalid upload receipt: {}", e)))?;

        Ok(receipt)
    }

    async fn update(&self, payload: UpdateBillPayload) -> Result<BillRecord> {
        let url = format!("{}/{}", self.bills_url(), payload.selector);

        let response = self
            .client
            .patch(&url)
            .json(&payload.data)
            .send()
            .await
            .map_err(|e| AppError::transport(format!("Bill update request failed: {}", e)))?;

        let response = Self::ensure_success(response).await?;

        let record: BillRecord = response
            .json()
            .await
            .map_err(|e| AppError::decode(format!("Invalid bill payload: {}", e)))?;

        Ok(record)
    }

    fn name(&self) -> &str {
        "rest"
    }
}
