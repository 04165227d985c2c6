use std::collections::VecDeque;
use tracing::{debug, trace};

use crate::crc::frame_checksum;
use crate::frame::{
    CHECKSUM_LEN, Frame, INCOMPAT_FLAG_SIGNED, MAX_PAYLOAD_LEN, ProtocolVersion, SIGNATURE_LEN,
    V2_HEADER_LEN,
};

/// MAVLink Stream Reader
///
/// Stateful reader turning a fragmented byte stream into validated frames.
/// It handles:
/// - MAVLink 1 and MAVLink 2 frames, signed or not
/// - Frames split across any number of `push` calls
/// - Noise, dropped bytes and corrupted frames, resynchronising on the byte
///   after a rejected start marker
///
/// One reader serves one ordered byte stream. Bytes from independent sources
/// must each go through their own reader.
///
/// # Usage
///
/// ```no_run
/// use mavframe::MavStreamReader;
///
/// let mut reader = MavStreamReader::new();
/// # let datagram: &[u8] = &[];
/// for frame in reader.push(datagram) {
///     println!("msg {} from {}", frame.message_id, frame.system_id);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReaderState {
    SeekStart,
    ReadHeader,
    ReadPayload,
    ReadChecksum,
    ReadSignature,
}

/// Counters describing what the reader did with its input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderStats {
    /// Frames emitted
    pub frames: u64,
    /// Bytes that did not end up in an emitted frame
    pub skipped_bytes: u64,
    pub checksum_failures: u64,
    /// Declared payload length above the configured maximum
    pub length_violations: u64,
    /// v2 headers carrying unsupported incompatibility flags
    pub malformed_headers: u64,
}

enum Step {
    Continue,
    Emit(Frame),
    /// Candidate rejected; bytes after its start marker must be scanned again
    Rescan(Vec<u8>),
}

pub struct MavStreamReader {
    state: ReaderState,
    version: ProtocolVersion,
    buffer: Vec<u8>,
    payload_len: usize,
    max_payload: usize,
    stats: ReaderStats,
}

impl MavStreamReader {
    /// Create a reader accepting payloads up to the protocol maximum
    pub fn new() -> Self {
        Self::with_max_payload(MAX_PAYLOAD_LEN)
    }

    /// Create a reader that rejects frames declaring more than `max_payload` bytes
    pub fn with_max_payload(max_payload: usize) -> Self {
        let max_payload = max_payload.min(MAX_PAYLOAD_LEN);
        Self {
            state: ReaderState::SeekStart,
            version: ProtocolVersion::V1,
            buffer: Vec::with_capacity(Self::frame_capacity(max_payload)),
            payload_len: 0,
            max_payload,
            stats: ReaderStats::default(),
        }
    }

    fn frame_capacity(max_payload: usize) -> usize {
        1 + V2_HEADER_LEN + max_payload + CHECKSUM_LEN + SIGNATURE_LEN
    }

    pub fn stats(&self) -> ReaderStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = ReaderStats::default();
    }

    /// Bytes currently held for an incomplete frame
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Largest number of bytes the reader will ever hold
    pub fn max_buffered_len(&self) -> usize {
        Self::frame_capacity(self.max_payload)
    }

    pub fn is_idle(&self) -> bool {
        self.state == ReaderState::SeekStart
    }

    /// Feed a chunk of bytes and collect every frame it completes
    ///
    /// # Arguments
    /// * `data` - Next bytes of the stream, in order
    ///
    /// # Returns
    /// Frames completed by this chunk, in stream order. Partial frames are
    /// kept until a later call completes or rejects them.
    pub fn push(&mut self, data: &[u8]) -> Vec<Frame> {
        let mut frames = Vec::new();
        let mut input: VecDeque<u8> = data.iter().copied().collect();

        while let Some(byte) = input.pop_front() {
            match self.step(byte) {
                Step::Continue => {}
                Step::Emit(frame) => frames.push(frame),
                Step::Rescan(bytes) => {
                    for b in bytes.into_iter().rev() {
                        input.push_front(b);
                    }
                }
            }
        }

        frames
    }

    fn step(&mut self, byte: u8) -> Step {
        match self.state {
            ReaderState::SeekStart => {
                match ProtocolVersion::from_marker(byte) {
                    Some(version) => {
                        self.version = version;
                        self.buffer.clear();
                        self.buffer.push(byte);
                        self.state = ReaderState::ReadHeader;
                    }
                    None => self.stats.skipped_bytes += 1,
                }
                Step::Continue
            }
            ReaderState::ReadHeader => {
                self.buffer.push(byte);
                if self.buffer.len() < 1 + self.version.header_len() {
                    return Step::Continue;
                }

                let declared = self.buffer[1] as usize;
                if declared > self.max_payload {
                    self.stats.length_violations += 1;
                    debug!("Rejecting frame declaring {} payload bytes (max {})", declared, self.max_payload);
                    return self.reject();
                }
                if self.version == ProtocolVersion::V2 && self.buffer[2] & !INCOMPAT_FLAG_SIGNED != 0 {
                    self.stats.malformed_headers += 1;
                    debug!("Rejecting v2 frame with incompat flags {:#04x}", self.buffer[2]);
                    return self.reject();
                }

                self.payload_len = declared;
                self.state = if declared == 0 {
                    ReaderState::ReadChecksum
                } else {
                    ReaderState::ReadPayload
                };
                Step::Continue
            }
            ReaderState::ReadPayload => {
                self.buffer.push(byte);
                if self.buffer.len() == self.checksum_offset() {
                    self.state = ReaderState::ReadChecksum;
                }
                Step::Continue
            }
            ReaderState::ReadChecksum => {
                self.buffer.push(byte);
                if self.buffer.len() < self.checksum_offset() + CHECKSUM_LEN {
                    return Step::Continue;
                }

                let frame = self.decode_buffer();
                let expected = frame_checksum(
                    &self.buffer[1..1 + self.version.header_len()],
                    &frame.payload,
                    frame.message_id,
                );
                if expected != frame.checksum {
                    self.stats.checksum_failures += 1;
                    trace!(
                        "Checksum mismatch for msg {}: got {:#06x}, expected {:#06x}",
                        frame.message_id, frame.checksum, expected
                    );
                    return self.reject();
                }

                if frame.is_signed() {
                    self.state = ReaderState::ReadSignature;
                    return Step::Continue;
                }
                self.emit(frame)
            }
            ReaderState::ReadSignature => {
                self.buffer.push(byte);
                if self.buffer.len() < self.checksum_offset() + CHECKSUM_LEN + SIGNATURE_LEN {
                    return Step::Continue;
                }
                // Signature content is not verified
                let frame = self.decode_buffer();
                self.emit(frame)
            }
        }
    }

    fn checksum_offset(&self) -> usize {
        1 + self.version.header_len() + self.payload_len
    }

    fn decode_buffer(&self) -> Frame {
        let b = &self.buffer;
        let payload_start = 1 + self.version.header_len();
        let checksum_at = payload_start + self.payload_len;
        let checksum = u16::from_le_bytes([b[checksum_at], b[checksum_at + 1]]);
        let payload = b[payload_start..checksum_at].to_vec();

        match self.version {
            ProtocolVersion::V1 => Frame {
                version: ProtocolVersion::V1,
                incompat_flags: 0,
                compat_flags: 0,
                sequence: b[2],
                system_id: b[3],
                component_id: b[4],
                message_id: b[5] as u32,
                payload,
                checksum,
            },
            ProtocolVersion::V2 => Frame {
                version: ProtocolVersion::V2,
                incompat_flags: b[2],
                compat_flags: b[3],
                sequence: b[4],
                system_id: b[5],
                component_id: b[6],
                message_id: u32::from_le_bytes([b[7], b[8], b[9], 0]),
                payload,
                checksum,
            },
        }
    }

    fn emit(&mut self, frame: Frame) -> Step {
        self.stats.frames += 1;
        self.buffer.clear();
        self.state = ReaderState::SeekStart;
        Step::Emit(frame)
    }

    fn reject(&mut self) -> Step {
        // Only the start marker is dropped for good
        self.stats.skipped_bytes += 1;
        let rescan = self.buffer.split_off(1);
        self.buffer.clear();
        self.state = ReaderState::SeekStart;
        Step::Rescan(rescan)
    }
}

impl Default for MavStreamReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{MAVLINK_V1_STX, MAVLINK_V2_STX};

    fn heartbeat_v1(seq: u8) -> Frame {
        Frame::new(ProtocolVersion::V1, seq, 1, 1, 0, vec![0, 0, 0, 0, 2, 3, 81, 4, 3]).unwrap()
    }

    fn position_v2(seq: u8) -> Frame {
        let mut payload = vec![0u8; 28];
        payload[4..8].copy_from_slice(&377_749_000i32.to_le_bytes());
        payload[8..12].copy_from_slice(&(-1_224_194_000i32).to_le_bytes());
        payload[12..16].copy_from_slice(&30_000i32.to_le_bytes());
        Frame::new(ProtocolVersion::V2, seq, 1, 1, 33, payload).unwrap()
    }

    #[test]
    fn test_whole_v1_frame() {
        let frame = heartbeat_v1(3);
        let mut reader = MavStreamReader::new();
        let frames = reader.push(&frame.to_bytes().unwrap());
        assert_eq!(frames, vec![frame]);
        assert_eq!(reader.stats().skipped_bytes, 0);
        assert!(reader.is_idle());
    }

    #[test]
    fn test_byte_by_byte_v2_frame() {
        let frame = position_v2(9);
        let mut reader = MavStreamReader::new();
        let mut frames = Vec::new();
        for b in frame.to_bytes().unwrap() {
            frames.extend(reader.push(&[b]));
        }
        assert_eq!(frames, vec![frame]);
    }

    #[test]
    fn test_chunking_does_not_matter() {
        let mut stream = heartbeat_v1(1).to_bytes().unwrap();
        stream.extend(position_v2(2).to_bytes().unwrap());
        stream.extend(heartbeat_v1(3).to_bytes().unwrap());

        for chunk_size in [1, 2, 3, 7, 13, 64] {
            let mut reader = MavStreamReader::new();
            let frames: Vec<Frame> = stream
                .chunks(chunk_size)
                .flat_map(|c| reader.push(c))
                .collect();
            let seqs: Vec<u8> = frames.iter().map(|f| f.sequence).collect();
            assert_eq!(seqs, vec![1, 2, 3], "chunk size {}", chunk_size);
        }
    }

    #[test]
    fn test_leading_noise_is_skipped() {
        let frame = heartbeat_v1(0);
        let mut stream = vec![0x00, 0x55, 0xAA];
        stream.extend(frame.to_bytes().unwrap());
        let mut reader = MavStreamReader::new();
        assert_eq!(reader.push(&stream), vec![frame]);
        assert_eq!(reader.stats().skipped_bytes, 3);
    }

    #[test]
    fn test_resync_after_corrupted_frame() {
        let first = heartbeat_v1(1);
        let mut corrupted = heartbeat_v1(2).to_bytes().unwrap();
        let last = corrupted.len() - 1;
        corrupted[last] ^= 0xFF;
        let third = heartbeat_v1(3);

        let mut stream = first.to_bytes().unwrap();
        stream.extend(&corrupted);
        stream.extend(third.to_bytes().unwrap());

        let mut reader = MavStreamReader::new();
        let frames = reader.push(&stream);
        assert_eq!(frames, vec![first, third]);
        assert_eq!(reader.stats().checksum_failures, 1);
        assert!(reader.stats().skipped_bytes > 0);
    }

    #[test]
    fn test_marker_inside_rejected_frame_is_rescanned() {
        // A valid frame hidden behind a stray v2 marker: the bogus candidate
        // swallows the real frame and fails, the real one must still be found
        let frame = heartbeat_v1(4);
        let mut stream = vec![MAVLINK_V2_STX];
        stream.extend(frame.to_bytes().unwrap());
        stream.extend(vec![0u8; 32]);

        let mut reader = MavStreamReader::new();
        let frames = reader.push(&stream);
        assert_eq!(frames, vec![frame]);
    }

    #[test]
    fn test_declared_length_above_limit_is_rejected() {
        let mut reader = MavStreamReader::with_max_payload(16);
        let mut oversized = vec![MAVLINK_V1_STX, 200, 0, 1, 1, 0];
        oversized.extend([0x11; 200]);

        let frames = reader.push(&oversized);
        assert!(frames.is_empty());
        assert_eq!(reader.stats().length_violations, 1);
        assert!(reader.buffered_len() <= reader.max_buffered_len());
        assert!(reader.is_idle());

        let good = Frame::new(ProtocolVersion::V1, 1, 1, 1, 0, vec![0x11; 9]).unwrap();
        assert_eq!(reader.push(&good.to_bytes().unwrap()), vec![good]);
    }

    #[test]
    fn test_buffer_never_exceeds_limit() {
        let mut reader = MavStreamReader::with_max_payload(8);
        let mut stream = Vec::new();
        for _ in 0..50 {
            stream.extend([MAVLINK_V1_STX, 0xF0, 0x22, 0x33, 0x44, 0x55]);
        }
        for b in stream {
            reader.push(&[b]);
            assert!(reader.buffered_len() <= reader.max_buffered_len());
        }
    }

    #[test]
    fn test_unknown_incompat_flags_rejected() {
        let mut frame = Frame::new(ProtocolVersion::V2, 0, 1, 1, 0, vec![1, 2, 3]).unwrap();
        frame.incompat_flags = 0x02;
        let bytes = frame.to_bytes().unwrap();
        let mut reader = MavStreamReader::new();
        assert!(reader.push(&bytes).is_empty());
        assert_eq!(reader.stats().malformed_headers, 1);
    }

    #[test]
    fn test_signed_frame_signature_is_consumed() {
        let mut frame = Frame::new(ProtocolVersion::V2, 5, 1, 1, 0, vec![0, 0, 0, 0, 2, 3, 81, 4, 3]).unwrap();
        frame.incompat_flags = INCOMPAT_FLAG_SIGNED;
        frame.checksum = frame_checksum(&frame.header_bytes().unwrap(), &frame.payload, 0);
        let mut bytes = frame.to_bytes().unwrap();
        bytes.extend([0x42; SIGNATURE_LEN]);
        let follow = heartbeat_v1(6);
        bytes.extend(follow.to_bytes().unwrap());

        let mut reader = MavStreamReader::new();
        let frames = reader.push(&bytes);
        assert_eq!(frames.len(), 2);
        assert!(frames[0].is_signed());
        assert_eq!(frames[1], follow);
        assert_eq!(reader.stats().skipped_bytes, 0);
    }

    #[test]
    fn test_reset_stats() {
        let mut reader = MavStreamReader::new();
        reader.push(&[0x01, 0x02]);
        assert_eq!(reader.stats().skipped_bytes, 2);
        reader.reset_stats();
        assert_eq!(reader.stats(), ReaderStats::default());
    }
}
