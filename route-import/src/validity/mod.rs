mod overlap_ops;
mod validity_error;
mod validity_interval;

pub use overlap_ops::{check_overlap, OverlapCheckResult};
pub use validity_error::ValidityError;
pub use validity_interval::{IntervalCandidate, ValidityInterval};
