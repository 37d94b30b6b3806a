pub mod table;
pub mod types;

// Re-export key types for convenient access
pub use table::{Table, TableConfig};
pub use types::{BallView, GameOutcome, PlayerId, TableSnapshot, TickEvent};
