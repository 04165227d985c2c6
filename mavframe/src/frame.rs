use std::fmt;

use crate::crc::frame_checksum;

/// Start-of-frame marker for MAVLink 1
pub const MAVLINK_V1_STX: u8 = 0xFE;
/// Start-of-frame marker for MAVLink 2
pub const MAVLINK_V2_STX: u8 = 0xFD;

/// Header bytes after the start marker: len, seq, sysid, compid, msgid
pub const V1_HEADER_LEN: usize = 5;
/// Header bytes after the start marker: len, incompat, compat, seq, sysid, compid, msgid[3]
pub const V2_HEADER_LEN: usize = 9;

pub const MAX_PAYLOAD_LEN: usize = 255;
pub const CHECKSUM_LEN: usize = 2;
pub const SIGNATURE_LEN: usize = 13;

/// Incompatibility flag marking a signed MAVLink 2 frame
pub const INCOMPAT_FLAG_SIGNED: u8 = 0x01;

/// Largest frame that can appear on the wire (v2, full payload, signed)
pub const MAX_FRAME_LEN: usize = 1 + V2_HEADER_LEN + MAX_PAYLOAD_LEN + CHECKSUM_LEN + SIGNATURE_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolVersion {
    V1,
    V2,
}

impl ProtocolVersion {
    pub fn from_marker(byte: u8) -> Option<Self> {
        match byte {
            MAVLINK_V1_STX => Some(ProtocolVersion::V1),
            MAVLINK_V2_STX => Some(ProtocolVersion::V2),
            _ => None,
        }
    }

    pub fn marker(&self) -> u8 {
        match self {
            ProtocolVersion::V1 => MAVLINK_V1_STX,
            ProtocolVersion::V2 => MAVLINK_V2_STX,
        }
    }

    /// Largest message id the header can carry
    pub fn max_message_id(&self) -> u32 {
        match self {
            ProtocolVersion::V1 => 0xFF,
            ProtocolVersion::V2 => 0xFF_FFFF,
        }
    }

    pub fn header_len(&self) -> usize {
        match self {
            ProtocolVersion::V1 => V1_HEADER_LEN,
            ProtocolVersion::V2 => V2_HEADER_LEN,
        }
    }
}

/// A checksum-validated MAVLink frame
///
/// `payload.len()` always equals the length declared in the header. For v1
/// frames both flag fields are zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub version: ProtocolVersion,
    pub incompat_flags: u8,
    pub compat_flags: u8,
    pub sequence: u8,
    pub system_id: u8,
    pub component_id: u8,
    pub message_id: u32,
    pub payload: Vec<u8>,
    pub checksum: u16,
}

impl Frame {
    /// Build a frame and compute its checksum
    ///
    /// Returns None if the payload or message id does not fit the
    /// version's header.
    pub fn new(
        version: ProtocolVersion,
        sequence: u8,
        system_id: u8,
        component_id: u8,
        message_id: u32,
        payload: Vec<u8>,
    ) -> Option<Self> {
        let mut frame = Self {
            version,
            incompat_flags: 0,
            compat_flags: 0,
            sequence,
            system_id,
            component_id,
            message_id,
            payload,
            checksum: 0,
        };
        let header = frame.header_bytes()?;
        frame.checksum = frame_checksum(&header, &frame.payload, message_id);
        Some(frame)
    }

    pub fn is_signed(&self) -> bool {
        self.version == ProtocolVersion::V2 && self.incompat_flags & INCOMPAT_FLAG_SIGNED != 0
    }

    /// True if the payload length and message id can be encoded in the header
    pub fn fits_header(&self) -> bool {
        self.payload.len() <= MAX_PAYLOAD_LEN && self.message_id <= self.version.max_message_id()
    }

    /// Header bytes as covered by the checksum (start marker excluded)
    pub fn header_bytes(&self) -> Option<Vec<u8>> {
        if !self.fits_header() {
            return None;
        }
        let len = self.payload.len() as u8;
        let id = self.message_id.to_le_bytes();
        let header = match self.version {
            ProtocolVersion::V1 => vec![len, self.sequence, self.system_id, self.component_id, id[0]],
            ProtocolVersion::V2 => vec![
                len,
                self.incompat_flags,
                self.compat_flags,
                self.sequence,
                self.system_id,
                self.component_id,
                id[0],
                id[1],
                id[2],
            ],
        };
        Some(header)
    }

    /// Serialize to wire format (unsigned)
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        let header = self.header_bytes()?;
        let mut out = Vec::with_capacity(1 + header.len() + self.payload.len() + CHECKSUM_LEN);
        out.push(self.version.marker());
        out.extend_from_slice(&header);
        out.extend_from_slice(&self.payload);
        out.extend_from_slice(&self.checksum.to_le_bytes());
        Some(out)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:?} msg {} seq {} from {}/{} ({} bytes)",
            self.version,
            self.message_id,
            self.sequence,
            self.system_id,
            self.component_id,
            self.payload.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v1_wire_layout() {
        let frame = Frame::new(ProtocolVersion::V1, 7, 1, 1, 0, vec![1, 2, 3]).unwrap();
        let bytes = frame.to_bytes().unwrap();
        assert_eq!(bytes.len(), 1 + V1_HEADER_LEN + 3 + CHECKSUM_LEN);
        assert_eq!(&bytes[..6], &[MAVLINK_V1_STX, 3, 7, 1, 1, 0]);
        assert_eq!(&bytes[9..], &frame.checksum.to_le_bytes());
    }

    #[test]
    fn test_v2_wire_layout_carries_24_bit_id() {
        let frame = Frame::new(ProtocolVersion::V2, 0, 255, 190, 0x01_02_03, vec![]).unwrap();
        let bytes = frame.to_bytes().unwrap();
        assert_eq!(bytes[0], MAVLINK_V2_STX);
        assert_eq!(&bytes[7..10], &[0x03, 0x02, 0x01]);
        assert_eq!(bytes.len(), 1 + V2_HEADER_LEN + CHECKSUM_LEN);
    }

    #[test]
    fn test_fields_that_do_not_fit_the_header() {
        assert!(Frame::new(ProtocolVersion::V1, 0, 1, 1, 0, vec![0; 300]).is_none());
        assert!(Frame::new(ProtocolVersion::V2, 0, 1, 1, 0, vec![0; 256]).is_none());
        assert!(Frame::new(ProtocolVersion::V2, 0, 1, 1, 0, vec![0; 255]).is_some());
        assert!(Frame::new(ProtocolVersion::V1, 0, 1, 1, 300, vec![]).is_none());
        assert!(Frame::new(ProtocolVersion::V2, 0, 1, 1, 300, vec![]).is_some());
        assert!(Frame::new(ProtocolVersion::V2, 0, 1, 1, 0x0100_0000, vec![]).is_none());
    }

    #[test]
    fn test_grown_payload_is_not_serialized() {
        let mut frame = Frame::new(ProtocolVersion::V1, 0, 1, 1, 0, vec![1, 2, 3]).unwrap();
        frame.payload = vec![0; 300];
        assert!(frame.header_bytes().is_none());
        assert!(frame.to_bytes().is_none());
    }

    #[test]
    fn test_marker_lookup() {
        assert_eq!(ProtocolVersion::from_marker(0xFE), Some(ProtocolVersion::V1));
        assert_eq!(ProtocolVersion::from_marker(0xFD), Some(ProtocolVersion::V2));
        assert_eq!(ProtocolVersion::from_marker(0x55), None);
    }
}
