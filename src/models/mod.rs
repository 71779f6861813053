// Domain models

mod load;
mod report;
mod validation;

pub use load::{LoadSample, RecordedLoad};
pub use report::{BucketAverages, LoadAverage, Report};
pub use validation::{FieldError, ValidationResult};
