pub mod ball;
pub mod pocket;
pub mod rack;

// Re-export key types for convenient access
pub use ball::{Ball, BallRole, WallMask};
pub use pocket::{pocket_layout, Pocket, PocketKind};
pub use rack::rack_layout;
