use mavlink::Message;
use mavlink::common::MavMessage as DialectMessage;

/// Initial value of the MAVLink X.25 accumulator
pub const X25_INIT: u16 = 0xFFFF;

/// Running X.25 (CRC-16/MCRF4XX) checksum as used by MAVLink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct X25 {
    crc: u16,
}

impl X25 {
    pub fn new() -> Self {
        Self { crc: X25_INIT }
    }

    pub fn accumulate(&mut self, byte: u8) {
        let mut tmp = byte ^ (self.crc & 0xFF) as u8;
        tmp ^= tmp << 4;
        let tmp = tmp as u16;
        self.crc = (self.crc >> 8) ^ (tmp << 8) ^ (tmp << 3) ^ (tmp >> 4);
    }

    pub fn accumulate_all(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.accumulate(b);
        }
    }

    pub fn value(&self) -> u16 {
        self.crc
    }
}

impl Default for X25 {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed byte mixed into the checksum of a message
///
/// Values come from the message definitions compiled into the `mavlink`
/// crate. Ids the dialect does not know yield 0, which makes their frames
/// fail validation instead of being accepted with a guessed seed.
pub fn crc_extra(message_id: u32) -> u8 {
    DialectMessage::extra_crc(message_id)
}

/// Compute the frame checksum over header (without start marker) and payload
///
/// # Arguments
/// * `header` - Header bytes following the start marker
/// * `payload` - Payload bytes, exactly as many as the header declares
/// * `message_id` - Message id used to look up the seed
pub fn frame_checksum(header: &[u8], payload: &[u8], message_id: u32) -> u16 {
    let mut crc = X25::new();
    crc.accumulate_all(header);
    crc.accumulate_all(payload);
    crc.accumulate(crc_extra(message_id));
    crc.value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x25_check_value() {
        // CRC-16/MCRF4XX check value for "123456789"
        let mut crc = X25::new();
        crc.accumulate_all(b"123456789");
        assert_eq!(crc.value(), 0x6F91);
    }

    #[test]
    fn test_x25_empty_is_init() {
        assert_eq!(X25::new().value(), X25_INIT);
    }

    #[test]
    fn test_known_seeds() {
        assert_eq!(crc_extra(0), 50); // HEARTBEAT
        assert_eq!(crc_extra(30), 39); // ATTITUDE
        assert_eq!(crc_extra(33), 104); // GLOBAL_POSITION_INT
    }

    #[test]
    fn test_checksum_depends_on_message_id() {
        let header = [0u8, 0, 1, 1];
        assert_ne!(
            frame_checksum(&header, &[], 0),
            frame_checksum(&header, &[], 30)
        );
    }
}
