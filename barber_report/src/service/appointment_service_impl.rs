use crate::common::*;

use crate::model::appointment::appointment_table::*;
use crate::traits::{
    repository_traits::scheduling_repository::*, service_traits::appointment_service::*,
};

#[derive(Debug, new)]
pub struct AppointmentServiceImpl<R: SchedulingRepository> {
    scheduling_repository: R,
}

#[async_trait]
impl<R: SchedulingRepository> AppointmentService for AppointmentServiceImpl<R> {
    async fn fetch_appointments(&self) -> AppointmentTable {
        match self.scheduling_repository.get_completed_appointments().await {
            Ok(records) => {
                let record_cnt: usize = records.len();
                info!("Fetched {} appointment records", record_cnt);
                AppointmentTable::from_records(records)
            }
            Err(e) => {
                error!(
                    "[AppointmentServiceImpl->fetch_appointments] Failed to load appointments: {}",
                    e
                );
                AppointmentTable::empty()
            }
        }
    }
}
