//! Filter settings and the filter stage of the aggregation pipeline.

mod apply;
mod spec;

pub use apply::apply;
pub use spec::{DateRange, FilterSpec, Granularity};
