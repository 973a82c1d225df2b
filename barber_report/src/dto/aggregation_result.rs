use crate::common::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct KeyCount {
    pub key: String,
    pub count: u64,
}

#[doc = r#"
    Group-by-count over one field of the appointment table.

    One pair per distinct value, each count >= 1, so the counts always add up to
    the number of rows that were aggregated.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct AggregationResult {
    pub key_field: String,
    pub pairs: Vec<KeyCount>,
}

impl AggregationResult {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.pairs.iter().map(|p| p.count).sum()
    }

    pub fn max_count(&self) -> u64 {
        self.pairs.iter().map(|p| p.count).max().unwrap_or(0)
    }

    pub fn keys(&self) -> Vec<String> {
        self.pairs.iter().map(|p| p.key.clone()).collect()
    }

    pub fn counts(&self) -> Vec<u64> {
        self.pairs.iter().map(|p| p.count).collect()
    }
}
