use crate::common::*;

pub const BARBER_NAME_FIELD: &str = "barbeiro_nome";
pub const SERVICE_NAME_FIELD: &str = "corte_nome";
pub const CLIENT_NAME_FIELD: &str = "cliente_nome";

#[doc = r#"
    One appointment as returned by `GET /agendamentos/completos`.

    Only `barbeiro_nome`, `corte_nome` and `cliente_nome` are used by the report;
    every other field of the payload is carried along untouched. Deserializing
    anything other than a JSON object into this type fails.
"#]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, new)]
#[serde(transparent)]
pub struct AppointmentRecord {
    fields: Map<String, Value>,
}

impl AppointmentRecord {
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_unrelated_fields() {
        let record: AppointmentRecord = serde_json::from_value(json!({
            "id": 7,
            "barbeiro_nome": "Carlos",
            "data": "2024-11-02"
        }))
        .unwrap();

        let fields = record.into_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields["id"], json!(7));
    }

    #[test]
    fn rejects_non_object() {
        let parsed: Result<Vec<AppointmentRecord>, _> = serde_json::from_str("[1, 2]");
        assert!(parsed.is_err());
    }
}
