pub mod aggregation_order;
pub mod chart_palette;
pub mod pipeline_outcome;
pub mod report_kind;
