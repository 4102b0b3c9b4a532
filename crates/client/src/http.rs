use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use expertbook_core::models::appointment::Appointment;
use expertbook_core::models::booking::{BookingOutcome, BookingRequest};
use expertbook_core::models::expert::Expert;

use crate::gateway::{BookingGateway, ClientError, ExpertDirectory};
use crate::models::{AppointmentRecord, CreatePreferenceRequest, CreatePreferenceResponse, ExpertRecord};

/// reqwest-backed client for the marketplace backend.
pub struct HttpMarketplaceClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpMarketplaceClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetches a 2xx response body and decodes it separately, so transport
    /// and payload problems stay distinguishable.
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let body = response.error_for_status()?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ExpertDirectory for HttpMarketplaceClient {
    async fn get_expert(&self, email: &str) -> Result<Option<Expert>, ClientError> {
        let url = self.url(&format!("/api/expertos/{email}"));
        debug!(%url, "fetching expert record");
        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let record: ExpertRecord = Self::decode(response).await?;
        Ok(Some(record.into_expert()))
    }

    async fn get_appointments(&self, email: &str) -> Result<Vec<Appointment>, ClientError> {
        let url = self.url(&format!("/api/expertos/{email}/citas"));
        debug!(%url, "fetching appointments");
        let response = self.http.get(&url).send().await?;
        let records: Vec<AppointmentRecord> = Self::decode(response).await?;
        Ok(records.into_iter().map(Appointment::from).collect())
    }
}

#[async_trait]
impl BookingGateway for HttpMarketplaceClient {
    async fn create_booking_preference(
        &self,
        request: BookingRequest,
    ) -> Result<BookingOutcome, ClientError> {
        let payload = CreatePreferenceRequest::from(request);
        debug!(expert = %payload.expert_email, start = %payload.start, "creating booking preference");
        let response = self
            .http
            .post(self.url("/api/pagos/preferencia"))
            .json(&payload)
            .send()
            .await?;
        let decoded: CreatePreferenceResponse = Self::decode(response).await?;
        Ok(decoded.into_outcome())
    }
}
