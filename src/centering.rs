use shiplabel_types::{Offset, Rect};

/// Offsets are snapped to this many steps per point.
const STEPS_PER_POINT: f32 = 100.0;

fn snap(value: f32) -> f32 {
    // f32::round rounds half away from zero
    (value * STEPS_PER_POINT).round() / STEPS_PER_POINT
}

/// Offset, from `container`'s own origin, that centres a block of the given
/// size inside it. Negative when the block is larger than the container.
pub fn center(container: Rect, block_width: f32, block_height: f32) -> Offset {
    Offset::new(
        snap((container.width - block_width) / 2.0),
        snap((container.height - block_height) / 2.0),
    )
}
