pub mod calculator;

pub use crate::domain::model::{CalculationInput, CalculationOutput, RawCalculationInput};
pub use crate::domain::ports::CorsProvider;
pub use crate::utils::error::CalcError;
