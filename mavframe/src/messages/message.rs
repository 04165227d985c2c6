use std::fmt;

use super::global_position_int::GlobalPositionInt;
use super::{GLOBAL_POSITION_INT_ID, HEARTBEAT_ID};
use crate::frame::{Frame, ProtocolVersion};

// Enum to hold the messages this library knows about
#[derive(Debug, Clone, PartialEq)]
pub enum MavMessage {
    GlobalPositionInt(GlobalPositionInt),
    /// Recognised by id only, payload is not decoded
    Heartbeat,
    Other(u32),
}

impl MavMessage {
    pub fn from_id(message_id: u32, payload: &[u8]) -> Self {
        match message_id {
            GLOBAL_POSITION_INT_ID => GlobalPositionInt::from_bytes(payload)
                .map(MavMessage::GlobalPositionInt)
                .unwrap_or(MavMessage::Other(message_id)),
            HEARTBEAT_ID => MavMessage::Heartbeat,
            _ => MavMessage::Other(message_id),
        }
    }

    /// Decode a frame's payload
    ///
    /// MAVLink 2 senders drop trailing zero bytes, so v2 payloads are
    /// zero-extended to the message's full length first. A v1 payload that
    /// is too short is not decoded.
    pub fn from_frame(frame: &Frame) -> Self {
        match (frame.version, encoded_len(frame.message_id)) {
            (ProtocolVersion::V2, Some(full)) if frame.payload.len() < full => {
                let mut payload = frame.payload.clone();
                payload.resize(full, 0);
                Self::from_id(frame.message_id, &payload)
            }
            _ => Self::from_id(frame.message_id, &frame.payload),
        }
    }

    pub fn message_id(&self) -> u32 {
        match self {
            MavMessage::GlobalPositionInt(_) => GLOBAL_POSITION_INT_ID,
            MavMessage::Heartbeat => HEARTBEAT_ID,
            MavMessage::Other(id) => *id,
        }
    }
}

/// Untruncated payload length of the messages decoded here
fn encoded_len(message_id: u32) -> Option<usize> {
    match message_id {
        GLOBAL_POSITION_INT_ID => Some(GlobalPositionInt::ENCODED_LEN),
        _ => None,
    }
}

impl fmt::Display for MavMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MavMessage::GlobalPositionInt(msg) => write!(f, "GLOBAL_POSITION_INT\n{}", msg),
            MavMessage::Heartbeat => write!(f, "HEARTBEAT"),
            MavMessage::Other(id) => write!(f, "Message {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream_reader::MavStreamReader;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_truncated_v1_position_is_not_a_position() {
        let frame = Frame::new(ProtocolVersion::V1, 0, 1, 1, GLOBAL_POSITION_INT_ID, vec![0u8; 11]).unwrap();
        assert_eq!(MavMessage::from_frame(&frame), MavMessage::Other(GLOBAL_POSITION_INT_ID));
    }

    #[test]
    fn test_zero_trimmed_v2_position_is_extended() {
        let mut payload = vec![0u8; 12];
        payload[4..8].copy_from_slice(&377_749_000i32.to_le_bytes());
        payload[8..12].copy_from_slice(&(-1_224_194_000i32).to_le_bytes());
        let frame = Frame::new(ProtocolVersion::V2, 0, 1, 1, GLOBAL_POSITION_INT_ID, payload).unwrap();

        let mut reader = MavStreamReader::new();
        let frames = reader.push(&frame.to_bytes().unwrap());
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].payload.len(), 12);

        match MavMessage::from_frame(&frames[0]) {
            MavMessage::GlobalPositionInt(pos) => {
                assert_abs_diff_eq!(pos.latitude, 37.7749, epsilon = 1e-6);
                assert_abs_diff_eq!(pos.longitude, -122.4194, epsilon = 1e-6);
                assert_abs_diff_eq!(pos.altitude, 0.0, epsilon = 1e-3);
            }
            other => panic!("expected a position, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_v2_position_decodes_as_origin() {
        let frame = Frame::new(ProtocolVersion::V2, 0, 1, 1, GLOBAL_POSITION_INT_ID, vec![]).unwrap();
        assert!(matches!(MavMessage::from_frame(&frame), MavMessage::GlobalPositionInt(_)));
    }

    #[test]
    fn test_heartbeat_recognised_by_id() {
        let frame = Frame::new(ProtocolVersion::V2, 0, 1, 1, HEARTBEAT_ID, vec![]).unwrap();
        assert_eq!(MavMessage::from_frame(&frame), MavMessage::Heartbeat);
    }

    #[test]
    fn test_other_ids_pass_through() {
        let msg = MavMessage::from_id(30, &[0u8; 28]);
        assert_eq!(msg, MavMessage::Other(30));
        assert_eq!(msg.message_id(), 30);
    }
}
