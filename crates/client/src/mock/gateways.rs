use async_trait::async_trait;
use mockall::mock;

use expertbook_core::models::appointment::Appointment;
use expertbook_core::models::booking::{BookingOutcome, BookingRequest};
use expertbook_core::models::expert::Expert;

use crate::gateway::{BookingGateway, ClientError, ExpertDirectory};

// Mock collaborators for testing
mock! {
    pub Directory {}

    #[async_trait]
    impl ExpertDirectory for Directory {
        async fn get_expert(&self, email: &str) -> Result<Option<Expert>, ClientError>;

        async fn get_appointments(&self, email: &str) -> Result<Vec<Appointment>, ClientError>;
    }
}

mock! {
    pub Gateway {}

    #[async_trait]
    impl BookingGateway for Gateway {
        async fn create_booking_preference(
            &self,
            request: BookingRequest,
        ) -> Result<BookingOutcome, ClientError>;
    }
}
