pub mod clock;

pub use clock::{friction_per_tick, TickClock, FRICTION_REFERENCE_RATE};
