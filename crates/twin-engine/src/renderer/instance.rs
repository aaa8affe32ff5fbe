use bytemuck::{Pod, Zeroable};

/// One filled rectangle for the canvas renderer.
/// Must match the TypeScript protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    /// Left edge in world space.
    pub x: f32,
    /// Top edge in world space.
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Fill colour, 0.0..=1.0 per channel.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl RectInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Self {
        let [r, g, b, a] = color;
        Self { x, y, w, h, r, g, b, a }
    }
}

/// Rectangles for the current frame, in draw order.
pub struct RenderBuffer {
    pub instances: Vec<RectInstance>,
    capacity: usize,
}

impl RenderBuffer {
    /// A buffer that holds at most `capacity` rectangles. Pushes beyond that are dropped.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Append a rectangle. Returns `false` when the buffer is full.
    pub fn push(&mut self, instance: RectInstance) -> bool {
        if self.instances.len() >= self.capacity {
            log::warn!("render buffer full ({} instances), dropping rect", self.capacity);
            return false;
        }
        self.instances.push(instance);
        true
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Raw pointer to instance data for reads from JS memory.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::with_capacity(128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<RectInstance>(), 32);
        assert_eq!(RectInstance::FLOATS, 8);
    }

    #[test]
    fn push_and_count() {
        let mut buf = RenderBuffer::with_capacity(4);
        assert!(buf.push(RectInstance::default()));
        assert!(buf.push(RectInstance::default()));
        assert_eq!(buf.instance_count(), 2);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
    }

    #[test]
    fn full_buffer_drops_extra_rects() {
        let mut buf = RenderBuffer::with_capacity(1);
        assert!(buf.push(RectInstance::new(0.0, 0.0, 1.0, 1.0, [1.0; 4])));
        assert!(!buf.push(RectInstance::default()));
        assert_eq!(buf.instance_count(), 1);
        assert_eq!(buf.instances[0].w, 1.0);
    }
}
