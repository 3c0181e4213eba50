// Data records and display helpers shared between the finance engine and its front ends.
pub mod models;
pub mod utils;
