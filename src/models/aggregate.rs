use serde::Serialize;

/// Total man-hours booked on one job code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobHours {
    pub job_code: String,
    pub hours: f64,
}

/// Output per hour for one worker. Only built when `hours > 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerStats {
    pub worker: String,
    pub output: f64,
    pub hours: f64,
    pub efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverStats {
    pub driver: String,
    pub distance: f64,
    pub fuel_ltrs: f64,
}

/// A driver's percentage of the total distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverShare {
    pub driver: String,
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ProductionTotals {
    pub hours: f64,
    pub output: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LogisticsTotals {
    pub distance: f64,
    pub fuel_ltrs: f64,
}
