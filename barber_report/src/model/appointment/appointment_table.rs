use crate::common::*;

use crate::dto::appointment_record::*;

#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct TableColumn {
    name: String,
    /// One slot per row; `None` where the record did not carry this field.
    values: Vec<Option<Value>>,
}

#[doc = r#"
    Columnar view over the appointments of one run.

    Columns are created in the order their names first show up in the payload, and
    rows keep fetch order. A record that lacks a column leaves a hole (`None`) in it
    instead of a made-up value, so aggregations can report exactly which row broke
    the schema. The table is built once and never mutated afterwards.
"#]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentTable {
    columns: Vec<TableColumn>,
    column_index: HashMap<String, usize>,
    row_count: usize,
}

impl AppointmentTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<AppointmentRecord>) -> Self {
        let mut table: AppointmentTable = Self::default();

        for record in records {
            table.push_record(record);
        }

        table
    }

    fn push_record(&mut self, record: AppointmentRecord) {
        let row: usize = self.row_count;

        for (name, value) in record.into_fields() {
            let idx: usize = match self.column_index.get(&name) {
                Some(&idx) => idx,
                None => {
                    /* a column first seen on a later row has holes for every earlier row */
                    self.columns.push(TableColumn {
                        name: name.clone(),
                        values: vec![None; row],
                    });
                    self.column_index.insert(name, self.columns.len() - 1);
                    self.columns.len() - 1
                }
            };

            let column: &mut TableColumn = &mut self.columns[idx];
            if column.values.len() == row {
                column.values.push(Some(value));
            }
        }

        for column in &mut self.columns {
            if column.values.len() == row {
                column.values.push(None);
            }
        }

        self.row_count += 1;
    }

    pub fn len(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&TableColumn> {
        self.column_index.get(name).map(|&idx| &self.columns[idx])
    }

    #[doc = "Rows that have no usable value (absent or JSON null) for `field`"]
    pub fn incomplete_rows(&self, field: &str) -> Vec<usize> {
        match self.column(field) {
            Some(column) => column
                .values
                .iter()
                .enumerate()
                .filter(|(_, v)| matches!(v, None | Some(Value::Null)))
                .map(|(row, _)| row)
                .collect(),
            None => (0..self.row_count).collect(),
        }
    }

    #[doc = r#"
        Text preview of the first `n` rows, one line per row, columns separated by ` | `.
        Missing cells print as `-`.
    "#]
    pub fn head(&self, n: usize) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(n.min(self.row_count) + 1);
        lines.push(self.column_names().join(" | "));

        for row in 0..n.min(self.row_count) {
            let cells: Vec<String> = self
                .columns
                .iter()
                .map(|c| match &c.values[row] {
                    None => "-".to_string(),
                    Some(Value::String(s)) => s.clone(),
                    Some(other) => other.to_string(),
                })
                .collect();

            lines.push(cells.join(" | "));
        }

        lines.join("\n")
    }
}
