//! Structuring Element (SEL) for morphological operations
//!
//! A structuring element defines the neighborhood stamped around each
//! boundary pixel. Only disks are needed here.

use crate::{MorphError, MorphResult};

/// Largest disk radius accepted by [`Sel::create_disk`].
pub const MAX_DISK_RADIUS: u32 = 4096;

/// Element type in a structuring element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum SelElement {
    /// Don't care - this position is ignored
    #[default]
    DontCare = 0,
    /// Hit - this position is stamped
    Hit = 1,
}

/// Structuring Element (SEL)
///
/// The origin (cx, cy) is the reference point placed on each boundary
/// pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sel {
    width: u32,
    height: u32,
    cx: u32,
    cy: u32,
    data: Vec<SelElement>,
    name: Option<String>,
}

impl Sel {
    /// Create a disk structuring element of the given radius.
    ///
    /// The SEL spans `(2r + 1)` x `(2r + 1)` with the origin at the center.
    /// An offset `(dx, dy)` is a hit iff `dx² + dy² < r²`, so radius 0 has
    /// no hits at all and radius 1 hits the origin only.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidSel`] if `radius > MAX_DISK_RADIUS`.
    pub fn create_disk(radius: u32) -> MorphResult<Self> {
        if radius > MAX_DISK_RADIUS {
            return Err(MorphError::InvalidSel(format!(
                "disk radius {radius} exceeds {MAX_DISK_RADIUS}"
            )));
        }

        let size = 2 * radius + 1;
        let r = radius as i64;
        let rr = r * r;
        let mut data = Vec::with_capacity((size * size) as usize);
        for dy in -r..=r {
            for dx in -r..=r {
                data.push(if dx * dx + dy * dy < rr {
                    SelElement::Hit
                } else {
                    SelElement::DontCare
                });
            }
        }

        Ok(Sel {
            width: size,
            height: size,
            cx: radius,
            cy: radius,
            data,
            name: Some(format!("disk{radius}")),
        })
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the origin x coordinate
    #[inline]
    pub fn origin_x(&self) -> u32 {
        self.cx
    }

    /// Get the origin y coordinate
    #[inline]
    pub fn origin_y(&self) -> u32 {
        self.cy
    }

    /// Get the name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get an element at (x, y)
    #[inline]
    pub fn get_element(&self, x: u32, y: u32) -> Option<SelElement> {
        if x < self.width && y < self.height {
            Some(self.data[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Count the number of hit elements
    pub fn hit_count(&self) -> usize {
        self.data.iter().filter(|&&e| e == SelElement::Hit).count()
    }

    /// Iterate over hit positions relative to origin
    pub fn hit_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cx = self.cx as i32;
        let cy = self.cy as i32;
        let width = self.width;

        self.data
            .iter()
            .enumerate()
            .filter_map(move |(idx, &elem)| {
                if elem == SelElement::Hit {
                    let x = (idx as u32 % width) as i32;
                    let y = (idx as u32 / width) as i32;
                    Some((x - cx, y - cy))
                } else {
                    None
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_radius_zero_has_no_hits() {
        let sel = Sel::create_disk(0).unwrap();
        assert_eq!(sel.width(), 1);
        assert_eq!(sel.hit_count(), 0);
        assert_eq!(sel.hit_offsets().count(), 0);
    }

    #[test]
    fn test_disk_radius_one_is_origin() {
        let sel = Sel::create_disk(1).unwrap();
        assert_eq!(sel.width(), 3);
        assert_eq!(sel.origin_x(), 1);
        assert_eq!(sel.hit_offsets().collect::<Vec<_>>(), vec![(0, 0)]);
    }

    #[test]
    fn test_disk_radius_two() {
        // dx² + dy² < 4: the plus sign of radius 1 plus the four diagonals
        let sel = Sel::create_disk(2).unwrap();
        assert_eq!(sel.hit_count(), 9);
        assert_eq!(sel.get_element(0, 2), Some(SelElement::DontCare));
        assert_eq!(sel.get_element(1, 1), Some(SelElement::Hit));
        assert_eq!(sel.get_element(5, 0), None);
        assert_eq!(sel.name(), Some("disk2"));
    }

    #[test]
    fn test_disk_membership_is_strict() {
        let sel = Sel::create_disk(5).unwrap();
        let hits: Vec<_> = sel.hit_offsets().collect();
        assert!(hits.contains(&(4, 0)));
        assert!(hits.contains(&(4, 2)));
        assert!(!hits.contains(&(5, 0)));
        assert!(!hits.contains(&(3, 4)));
        assert!(hits.iter().all(|&(dx, dy)| dx * dx + dy * dy < 25));
    }

    #[test]
    fn test_disk_radius_limit() {
        assert!(Sel::create_disk(MAX_DISK_RADIUS + 1).is_err());
    }
}
