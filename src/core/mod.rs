pub mod aggregate;
pub mod dashboard;
pub mod filter;

pub use dashboard::Dashboard;
