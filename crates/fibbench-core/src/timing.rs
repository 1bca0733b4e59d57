use std::fmt;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};

use crate::strategy::Strategy;

/// One timed top-level call: which strategy, which argument, how long.
///
/// Produced once per outermost invocation; recursive sub-calls are never
/// measured individually.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub strategy: Strategy,
    pub n: i64,
    #[serde(rename = "elapsed_secs", serialize_with = "as_secs_f64")]
    pub elapsed: Duration,
}

fn as_secs_f64<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

impl fmt::Display for Measurement {
    /// Nine fractional digits, e.g. `fib(30) took 0.000123456 seconds`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) took {:.9} seconds",
            self.strategy.fn_name(),
            self.n,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Invokes `call(n)` exactly once and wall-clocks that single invocation.
///
/// The callee's return value comes back untouched, paired with the
/// [`Measurement`]. Timing a recursive strategy through this wrapper
/// instruments only the outermost call.
pub fn timed<T, F>(strategy: Strategy, n: i64, call: F) -> (T, Measurement)
where
    F: FnOnce(i64) -> T,
{
    let start = Instant::now();
    let result = call(n);
    let elapsed = start.elapsed();
    let measurement = Measurement {
        strategy,
        n,
        elapsed,
    };
    tracing::debug!(strategy = %strategy, n, elapsed_secs = elapsed.as_secs_f64(), "timed call");
    (result, measurement)
}
