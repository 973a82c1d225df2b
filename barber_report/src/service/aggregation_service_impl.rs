use crate::common::*;

use crate::dto::aggregation_result::*;
use crate::enums::aggregation_order::*;
use crate::errors::report_error::*;
use crate::model::appointment::appointment_table::*;
use crate::traits::service_traits::aggregation_service::*;

#[derive(Debug, Clone, Default, new)]
pub struct AggregationServiceImpl;

impl AggregationServiceImpl {
    #[doc = "Group key of a cell. JSON null counts as a missing value"]
    fn cell_key(value: &Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl AggregationService for AggregationServiceImpl {
    fn aggregate(
        &self,
        table: &AppointmentTable,
        key_field: &str,
        order: AggregationOrder,
    ) -> Result<AggregationResult, SchemaError> {
        if table.is_empty() {
            return Err(SchemaError::EmptyTable {
                field: key_field.to_string(),
            });
        }

        let column: &TableColumn =
            table
                .column(key_field)
                .ok_or_else(|| SchemaError::MissingColumn {
                    field: key_field.to_string(),
                })?;

        let missing: Vec<usize> = table.incomplete_rows(key_field);

        if !missing.is_empty() {
            return Err(SchemaError::MissingField {
                field: key_field.to_string(),
                rows: missing,
            });
        }

        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut pairs: Vec<KeyCount> = Vec::new();

        for key in column
            .values()
            .iter()
            .filter_map(|cell| cell.as_ref().and_then(Self::cell_key))
        {
            match positions.get(&key) {
                Some(&idx) => pairs[idx].count += 1,
                None => {
                    positions.insert(key.clone(), pairs.len());
                    pairs.push(KeyCount::new(key, 1));
                }
            }
        }

        /* sort_by is stable, so equal counts keep first-occurrence order */
        match order {
            AggregationOrder::CountDesc => pairs.sort_by(|a, b| b.count.cmp(&a.count)),
            AggregationOrder::KeyAsc => pairs.sort_by(|a, b| a.key.cmp(&b.key)),
        }

        Ok(AggregationResult::new(key_field.to_string(), pairs))
    }
}
