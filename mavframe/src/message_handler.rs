use std::time::Instant;

use crate::{Frame, MavMessage};

/// Trait for components that consume validated MAVLink frames
///
/// Every handler sees every frame and picks the messages it cares about,
/// keeping the bridge loop unaware of what each consumer needs.
pub trait MessageHandler {
    /// Process one validated frame and its decoded message
    fn handle_message(&mut self, frame: &Frame, message: &MavMessage, timestamp: Instant);
}
