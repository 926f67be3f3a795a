//! SharedArrayBuffer layout.
//! Must stay in sync with TypeScript `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Camera: 16 floats (column-major view-projection)]
//! [Bodies: max_bodies × 12 floats]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Capacities are written once into the header at init.
//! TypeScript reads them from the header to compute offsets dynamically.

use crate::api::app::AppConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_BODIES: usize = 2;
pub const HEADER_BODY_COUNT: usize = 3;
pub const HEADER_MAX_EVENTS: usize = 4;
pub const HEADER_EVENT_COUNT: usize = 5;
pub const HEADER_VIEWPORT_WIDTH: usize = 6;
pub const HEADER_VIEWPORT_HEIGHT: usize = 7;
pub const HEADER_PROTOCOL_VERSION: usize = 8;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera uniform section (4×4 matrix — wire format).
pub const CAMERA_FLOATS: usize = 16;

/// Floats per body instance (wire format — never changes).
pub const BODY_FLOATS: usize = 12;

/// Floats per app event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout derived from app capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum body instances.
    pub max_bodies: usize,
    /// Maximum app events per frame.
    pub max_events: usize,

    /// Size of body data section in floats.
    pub body_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where the camera uniform begins.
    pub camera_offset: usize,
    /// Offset (in floats) where body data begins.
    pub body_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_bodies: usize, max_events: usize) -> Self {
        let body_data_floats = max_bodies * BODY_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let camera_offset = HEADER_FLOATS;
        let body_data_offset = camera_offset + CAMERA_FLOATS;
        let event_data_offset = body_data_offset + body_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_bodies,
            max_events,
            body_data_floats,
            event_data_floats,
            camera_offset,
            body_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from an AppConfig.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.max_bodies, config.max_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&AppConfig::default());

        assert_eq!(layout.max_bodies, 64);
        assert_eq!(layout.max_events, 32);
        assert_eq!(layout.body_data_floats, 64 * BODY_FLOATS);
        assert_eq!(layout.event_data_floats, 32 * EVENT_FLOATS);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(10, 8);

        assert_eq!(layout.camera_offset, HEADER_FLOATS);
        assert_eq!(layout.body_data_offset, HEADER_FLOATS + CAMERA_FLOATS);
        assert_eq!(
            layout.event_data_offset,
            layout.body_data_offset + layout.body_data_floats
        );
        assert_eq!(
            layout.buffer_total_floats,
            layout.event_data_offset + layout.event_data_floats
        );
    }

    #[test]
    fn custom_capacities_compute_correctly() {
        let layout = ProtocolLayout::new(16, 8);
        assert_eq!(layout.body_data_floats, 16 * 12);
        assert_eq!(layout.event_data_floats, 8 * 4);

        let expected_total = HEADER_FLOATS + CAMERA_FLOATS + 16 * 12 + 8 * 4;
        assert_eq!(layout.buffer_total_floats, expected_total);
    }
}
