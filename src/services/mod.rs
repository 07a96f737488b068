// Core services
pub mod arrivals;
pub mod export;
pub mod reports;
pub mod suggestions;
