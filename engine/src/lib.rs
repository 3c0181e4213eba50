// Engine library root: the finance calculators and the plumbing around them.

pub mod calculators;
pub mod config;
pub mod data;
pub mod error;
pub mod services;

pub use error::{EngineError, FinanceError};
