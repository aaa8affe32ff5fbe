use crate::core::body::{Body, BodyKind};
use crate::core::platform::{Platform, PlatformKind};
use crate::core::tuning::Tuning;
use crate::core::world::World;
use crate::renderer::instance::{RectInstance, RenderBuffer};

pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// #b35900
pub const GOAL_BROWN: [f32; 4] = [0xb3 as f32 / 255.0, 0x59 as f32 / 255.0, 0.0, 1.0];

pub fn body_color(kind: BodyKind) -> [f32; 4] {
    match kind {
        BodyKind::Red => RED,
        BodyKind::Blue => BLUE,
    }
}

/// Red-only platforms are drawn red, blue-only blue, forbidden green.
pub fn platform_color(platform: &Platform) -> [f32; 4] {
    if platform.goal {
        return GOAL_BROWN;
    }
    match platform.kind {
        PlatformKind::Neutral => BLACK,
        PlatformKind::RedOnly => RED,
        PlatformKind::BlueOnly => BLUE,
        PlatformKind::Forbidden => GREEN,
    }
}

fn body_instance(body: &Body, size: f32) -> RectInstance {
    let rect = body.rect(size);
    RectInstance::new(rect.x, rect.y, rect.w, rect.h, body_color(body.kind))
}

/// Rebuild the buffer from the world: platforms in sequence order, then both blocks.
pub fn build_render_buffer(world: &World, tuning: &Tuning, buffer: &mut RenderBuffer) {
    buffer.clear();

    for platform in world.platforms() {
        let rect = platform.rect();
        buffer.push(RectInstance::new(
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            platform_color(platform),
        ));
    }

    for body in world.bodies() {
        buffer.push(body_instance(body, tuning.body_size));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn world() -> World {
        World::new(
            Vec2::new(250.0, 470.0),
            Vec2::new(230.0, 470.0),
            vec![
                Platform::new(Vec2::new(0.0, 490.0), 500.0, 5.0, PlatformKind::Neutral),
                Platform::new(Vec2::new(100.0, 300.0), 40.0, 5.0, PlatformKind::Forbidden),
                Platform::new(Vec2::new(300.0, 300.0), 40.0, 5.0, PlatformKind::BlueOnly),
                Platform::goal(Vec2::new(200.0, 100.0), 100.0, 5.0),
            ],
        )
    }

    #[test]
    fn platforms_then_bodies() {
        let mut buf = RenderBuffer::with_capacity(16);
        build_render_buffer(&world(), &Tuning::default(), &mut buf);

        assert_eq!(buf.instance_count(), 6);
        let colors: Vec<[f32; 4]> = buf
            .instances
            .iter()
            .map(|i| [i.r, i.g, i.b, i.a])
            .collect();
        assert_eq!(colors, vec![BLACK, GREEN, BLUE, GOAL_BROWN, RED, BLUE]);

        let red = buf.instances[4];
        assert_eq!((red.x, red.y, red.w, red.h), (250.0, 470.0, 20.0, 20.0));
        let floor = buf.instances[0];
        assert_eq!((floor.w, floor.h), (500.0, 5.0));
    }

    #[test]
    fn rebuild_replaces_previous_frame() {
        let mut buf = RenderBuffer::with_capacity(16);
        build_render_buffer(&world(), &Tuning::default(), &mut buf);
        build_render_buffer(&World::empty(), &Tuning::default(), &mut buf);
        assert_eq!(buf.instance_count(), 2);
    }

    #[test]
    fn goal_brown_matches_hex() {
        assert!((GOAL_BROWN[0] - 0.702).abs() < 1e-3);
        assert!((GOAL_BROWN[1] - 0.349).abs() < 1e-3);
    }
}
