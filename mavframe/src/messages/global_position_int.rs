use std::fmt;

/// Fused global position (GLOBAL_POSITION_INT), reduced to the 3D fix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalPositionInt {
    pub latitude: f64,  // degrees
    pub longitude: f64, // degrees
    pub altitude: f64,  // meters (MSL)
}

impl GlobalPositionInt {
    /// Payload bytes needed to reach the end of the altitude field
    pub const MIN_LEN: usize = 16;
    /// Full payload length before MAVLink 2 trailing-zero truncation
    pub const ENCODED_LEN: usize = 28;

    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < Self::MIN_LEN {
            return None;
        }
        // time_boot_ms occupies bytes 0..4
        Some(Self {
            latitude: i32::from_le_bytes([data[4], data[5], data[6], data[7]]) as f64 * 1e-7,
            longitude: i32::from_le_bytes([data[8], data[9], data[10], data[11]]) as f64 * 1e-7,
            altitude: i32::from_le_bytes([data[12], data[13], data[14], data[15]]) as f64 * 1e-3,
        })
    }
}

impl fmt::Display for GlobalPositionInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "      Lat: {:.5} | Lon: {:.5} | Alt: {:.1} m",
            self.latitude, self.longitude, self.altitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn payload(lat: i32, lon: i32, alt: i32) -> Vec<u8> {
        let mut data = vec![0u8; 28];
        data[4..8].copy_from_slice(&lat.to_le_bytes());
        data[8..12].copy_from_slice(&lon.to_le_bytes());
        data[12..16].copy_from_slice(&alt.to_le_bytes());
        data
    }

    #[test]
    fn test_decode_position() {
        let pos = GlobalPositionInt::from_bytes(&payload(377_749_000, -1_224_194_000, 30_000)).unwrap();
        assert_abs_diff_eq!(pos.latitude, 37.7749, epsilon = 1e-6);
        assert_abs_diff_eq!(pos.longitude, -122.4194, epsilon = 1e-6);
        assert_abs_diff_eq!(pos.altitude, 30.0, epsilon = 1e-3);
    }

    #[test]
    fn test_minimal_length_is_enough() {
        let data = payload(1, 2, 3);
        assert!(GlobalPositionInt::from_bytes(&data[..GlobalPositionInt::MIN_LEN]).is_some());
    }

    #[test]
    fn test_short_payload_is_rejected() {
        let data = payload(377_749_000, -1_224_194_000, 30_000);
        assert!(GlobalPositionInt::from_bytes(&data[..11]).is_none());
        assert!(GlobalPositionInt::from_bytes(&data[..15]).is_none());
        assert!(GlobalPositionInt::from_bytes(&[]).is_none());
    }

    #[test]
    fn test_display() {
        let pos = GlobalPositionInt::from_bytes(&payload(377_749_000, -1_224_194_000, 30_000)).unwrap();
        let text = pos.to_string();
        assert!(text.contains("37.77490"));
        assert!(text.contains("-122.41940"));
        assert!(text.contains("30.0 m"));
    }
}
