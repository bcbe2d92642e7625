pub mod aggregate;
pub mod logistics;
pub mod period;
pub mod production;
pub mod record;
pub mod table;

pub use aggregate::{
    DriverShare, DriverStats, JobHours, LogisticsTotals, ProductionTotals, WorkerStats,
};
pub use logistics::LogisticsRecord;
pub use period::{Period, PeriodWindow};
pub use production::ProductionRecord;
pub use record::LogRecord;
pub use table::LogTable;
