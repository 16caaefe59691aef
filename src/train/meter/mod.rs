//! Validation meters: one formatted line per metric with value, trend and
//! a sparkline of recent history.

mod builder;
mod sparkline;
mod trend;

pub use builder::MetricMeterBuilder;
pub use sparkline::{sparkline, SPARK_CHARS};
pub use trend::{MetricGoal, Trend};
