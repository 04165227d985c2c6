//! MAVLink Framing Library
//!
//! This library turns an untrusted, arbitrarily fragmented MAVLink byte stream
//! into validated frames:
//! - X.25 checksum with the per-message seed (`CRC_EXTRA`) table from the
//!   official message definitions
//! - Streaming frame reader for MAVLink v1 and v2 with resynchronisation
//! - Decoder for the position message used by the local display
//! - Message handler trait for components consuming decoded frames
//!
//! # Example
//!
//! ```no_run
//! use mavframe::{MavStreamReader, MavMessage};
//!
//! let mut reader = MavStreamReader::new();
//! let datagram: &[u8] = &[];
//!
//! for frame in reader.push(datagram) {
//!     if let MavMessage::GlobalPositionInt(pos) = MavMessage::from_frame(&frame) {
//!         println!("{}", pos);
//!     }
//! }
//! ```

pub mod crc;
pub mod frame;
pub mod stream_reader;
pub mod messages;
pub mod message_handler;

// Re-export commonly used types
pub use frame::{Frame, ProtocolVersion};
pub use stream_reader::{MavStreamReader, ReaderStats};
pub use message_handler::MessageHandler;
pub use messages::MavMessage;
