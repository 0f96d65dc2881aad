pub mod domain;
pub mod portfolio_services;
pub mod ports;
pub mod services;

pub use portfolio_services::PortfolioServices;
