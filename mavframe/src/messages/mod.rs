pub mod global_position_int;
pub mod message;

// Re-export commonly used types
pub use message::MavMessage;
pub use global_position_int::GlobalPositionInt;

/// HEARTBEAT
pub const HEARTBEAT_ID: u32 = 0;
/// GLOBAL_POSITION_INT
pub const GLOBAL_POSITION_INT_ID: u32 = 33;
