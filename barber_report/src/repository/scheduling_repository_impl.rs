use crate::common::*;

use crate::dto::appointment_record::*;
use crate::errors::report_error::*;
use crate::model::configs::scheduler_config::*;
use crate::traits::repository_traits::scheduling_repository::*;

#[derive(Debug, Clone)]
pub struct SchedulingRepositoryImpl {
    client: Client,
    appointments_url: String,
}

impl SchedulingRepositoryImpl {
    #[doc = r#"
        Builds the HTTP client for the scheduling service.

        # Errors
        Returns `FetchError::Http` when the underlying `reqwest::Client` cannot be constructed.
    "#]
    pub fn new(scheduler_config: &SchedulerConfig) -> Result<Self, FetchError> {
        let client: Client = Client::builder()
            .timeout(Duration::from_secs(*scheduler_config.timeout_sec()))
            .build()?;

        Ok(SchedulingRepositoryImpl {
            client,
            appointments_url: scheduler_config.appointments_url(),
        })
    }
}

#[async_trait]
impl SchedulingRepository for SchedulingRepositoryImpl {
    async fn get_completed_appointments(&self) -> Result<Vec<AppointmentRecord>, FetchError> {
        info!("Requesting appointments from {}", self.appointments_url);

        let response: reqwest::Response = self.client.get(&self.appointments_url).send().await?;

        let status: StatusCode = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: self.appointments_url.clone(),
            });
        }

        let body = response.bytes().await?;

        serde_json::from_slice::<Vec<AppointmentRecord>>(&body).map_err(|source| {
            FetchError::Decode {
                url: self.appointments_url.clone(),
                source,
            }
        })
    }
}
