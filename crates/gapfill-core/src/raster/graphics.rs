//! Disk geometry for brush and eraser stamps

/// Offsets `(dx, dy)` of a filled disk of the given radius, centered on
/// the origin.
///
/// A point belongs to the disk when `dx² + dy² <= (radius + 0.5)²`, which
/// gives round-looking disks at small radii. Radius 0 yields the origin
/// alone.
pub fn filled_disk_offsets(radius: u32) -> Vec<(i32, i32)> {
    if radius == 0 {
        return vec![(0, 0)];
    }

    let r = radius as i32;
    let threshold = (radius as f32 + 0.5).powi(2);
    let diameter = (2 * radius + 1) as usize;
    let mut offsets = Vec::with_capacity(diameter * diameter);

    for dy in -r..=r {
        for dx in -r..=r {
            if ((dx * dx + dy * dy) as f32) <= threshold {
                offsets.push((dx, dy));
            }
        }
    }

    offsets
}
