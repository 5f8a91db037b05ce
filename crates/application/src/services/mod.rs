pub mod input_staging;
pub mod result_validator;

pub use input_staging::{path_arg, stage_input};
pub use result_validator::{ExpectedParameters, HeaderCheck, ResultValidator};
