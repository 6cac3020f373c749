//! Hit counting for the static-file path.
//!
//! # Data Flow
//! ```text
//! Request to /app/* :
//!     → middleware.rs (increment, then delegate)
//!     → ServeDir handles the file
//!
//! Admin surface:
//!     → hits.rs load()  (metrics page)
//!     → hits.rs reset() (reset endpoint)
//! ```
//!
//! # Design Decisions
//! - One atomic is the only shared mutable state in the process
//! - Increment happens before delegation, unconditionally

pub mod hits;
pub mod middleware;

pub use hits::HitCounter;
