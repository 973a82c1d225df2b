/// How the pairs of an aggregation are ordered before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationOrder {
    /// Highest count first; equal counts keep first-occurrence order.
    CountDesc,
    /// Lexicographic by key.
    KeyAsc,
}
