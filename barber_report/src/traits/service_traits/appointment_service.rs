use crate::common::*;

use crate::model::appointment::appointment_table::*;

#[async_trait]
pub trait AppointmentService: Send + Sync {
    #[doc = "
        Fetch every completed appointment and load it into a table.
        Any fetch failure is logged and yields an empty table instead of an error.
    "]
    async fn fetch_appointments(&self) -> AppointmentTable;
}
