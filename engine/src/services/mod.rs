// Services composing the calculators into complete reports.
pub mod dashboard_service;

pub use dashboard_service::DashboardService;
