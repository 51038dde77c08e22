//! Shared response data for the backend API.
//!
//! Holds the fixed item catalog served by `/data` and the wall-clock
//! abstraction every timestamped response reads from.

pub mod clock;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock, Timestamp};
pub use types::{Item, ItemId, catalog};
