pub mod cache;
pub mod error;
pub mod strategy;
pub mod timing;

pub use cache::TermCache;
pub use error::{FibError, FibResult};
pub use strategy::{fib_iterative, fib_memoized, fib_naive, Strategy, Term};
pub use timing::{timed, Measurement};
