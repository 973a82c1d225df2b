use crate::dto::aggregation_result::*;
use crate::enums::aggregation_order::*;
use crate::errors::report_error::*;
use crate::model::appointment::appointment_table::*;

pub trait AggregationService: Send + Sync {
    #[doc = "
        Count records per distinct value of `key_field`, ordered as requested.
        # Errors
        * `SchemaError` - the table is empty or some record has no value for `key_field`
    "]
    fn aggregate(
        &self,
        table: &AppointmentTable,
        key_field: &str,
        order: AggregationOrder,
    ) -> Result<AggregationResult, SchemaError>;
}
