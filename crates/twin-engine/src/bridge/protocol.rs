/// Frame buffer layout shared with the TypeScript host.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 12 floats]
/// [Instances: max_instances × 8 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are repeated in every header so the host can compute offsets
/// without a separate handshake.

use crate::api::game::GameConfig;
use crate::api::types::GameEvent;
use crate::renderer::instance::RectInstance;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 12;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_WORLD_WIDTH: usize = 4;
pub const HEADER_WORLD_HEIGHT: usize = 5;
pub const HEADER_MAX_EVENTS: usize = 6;
pub const HEADER_EVENT_COUNT: usize = 7;
pub const HEADER_PROTOCOL_VERSION: usize = 8;
pub const HEADER_PHASE: usize = 9;
// 10 and 11 are reserved and written as zero.

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per rectangle: x, y, w, h, r, g, b, a (wire format, never changes).
pub const INSTANCE_FLOATS: usize = RectInstance::FLOATS;

/// Floats per game event: kind, a, b, c (wire format, never changes).
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;

/// Per-frame values written into the header.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameHeader {
    pub frame_counter: u32,
    pub world_width: f32,
    pub world_height: f32,
    /// Numeric phase code, see `Phase::code`.
    pub phase: u32,
}

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_events: usize,

    /// Size of instance data section in floats.
    pub instance_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_events: usize) -> Self {
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let instance_data_offset = HEADER_FLOATS;
        let event_data_offset = instance_data_offset + instance_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_instances,
            max_events,
            instance_data_floats,
            event_data_floats,
            instance_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_instances, config.max_events)
    }

    /// Write one complete frame into `out`, resizing it to `buffer_total_floats`.
    /// Instances and events beyond capacity are cut off; unused slots are zeroed.
    pub fn pack(
        &self,
        header: &FrameHeader,
        instances: &[RectInstance],
        events: &[GameEvent],
        out: &mut Vec<f32>,
    ) {
        out.clear();
        out.resize(self.buffer_total_floats, 0.0);

        let instances = &instances[..instances.len().min(self.max_instances)];
        let events = &events[..events.len().min(self.max_events)];

        out[HEADER_FRAME_COUNTER] = header.frame_counter as f32;
        out[HEADER_MAX_INSTANCES] = self.max_instances as f32;
        out[HEADER_INSTANCE_COUNT] = instances.len() as f32;
        out[HEADER_WORLD_WIDTH] = header.world_width;
        out[HEADER_WORLD_HEIGHT] = header.world_height;
        out[HEADER_MAX_EVENTS] = self.max_events as f32;
        out[HEADER_EVENT_COUNT] = events.len() as f32;
        out[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        out[HEADER_PHASE] = header.phase as f32;

        let instance_floats: &[f32] = bytemuck::cast_slice(instances);
        out[self.instance_data_offset..self.instance_data_offset + instance_floats.len()]
            .copy_from_slice(instance_floats);

        let event_floats: &[f32] = bytemuck::cast_slice(events);
        out[self.event_data_offset..self.event_data_offset + event_floats.len()]
            .copy_from_slice(event_floats);
    }
}
