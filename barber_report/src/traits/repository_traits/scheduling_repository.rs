use crate::common::*;

use crate::dto::appointment_record::*;
use crate::errors::report_error::*;

#[async_trait]
pub trait SchedulingRepository: Send + Sync {
    /// One GET against the completed-appointments endpoint; no retry, no paging.
    async fn get_completed_appointments(&self) -> Result<Vec<AppointmentRecord>, FetchError>;
}
