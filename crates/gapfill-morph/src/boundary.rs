//! Boundary worklists
//!
//! A boundary pixel is a foreground pixel with at least one background
//! 4-neighbor. Pixels on the first or last row or column of the image are
//! never boundary candidates, so neighbor reads stay inside the image.
//!
//! The list is built in one scan of the mask and can then drive any
//! number of stamping passes without rescanning.

use gapfill_core::Mask;

/// Worklist of boundary pixels of one mask, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    width: u32,
    height: u32,
    points: Vec<(u32, u32)>,
}

impl Boundary {
    /// Collect the boundary pixels of `mask`.
    pub fn of(mask: &Mask) -> Self {
        let w = mask.width();
        let h = mask.height();
        let mut points = Vec::new();

        for y in 1..h.saturating_sub(1) {
            for x in 1..w.saturating_sub(1) {
                if is_boundary(mask, x, y) {
                    points.push((x, y));
                }
            }
        }

        Boundary {
            width: w,
            height: h,
            points,
        }
    }

    /// Size `(width, height)` of the mask this list was built from.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of boundary pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the mask had no boundary pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Boundary pixels as `(x, y)`.
    pub fn points(&self) -> &[(u32, u32)] {
        &self.points
    }
}

/// Whether the interior pixel (x, y) is foreground with a background
/// 4-neighbor. The caller guarantees `1 <= x < w - 1` and `1 <= y < h - 1`.
#[inline]
fn is_boundary(mask: &Mask, x: u32, y: u32) -> bool {
    mask.get(x, y)
        && (!mask.get(x - 1, y)
            || !mask.get(x + 1, y)
            || !mask.get(x, y - 1)
            || !mask.get(x, y + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_of_square() {
        // 5x5 square in a 9x9 image: 16 boundary pixels, 9 interior
        let mask =
            Mask::from_fn(9, 9, |x, y| (2..7).contains(&x) && (2..7).contains(&y)).unwrap();
        let boundary = Boundary::of(&mask);
        assert_eq!(boundary.len(), 16);
        assert!(boundary.points().contains(&(2, 2)));
        assert!(!boundary.points().contains(&(4, 4)));
        assert_eq!(boundary.dimensions(), (9, 9));
    }

    #[test]
    fn test_image_edge_is_never_a_candidate() {
        let full = Mask::from_fn(6, 6, |_, _| true).unwrap();
        assert!(Boundary::of(&full).is_empty());

        let column = Mask::from_fn(6, 6, |x, _| x == 0).unwrap();
        assert!(Boundary::of(&column).is_empty());
    }

    #[test]
    fn test_single_pixel_is_boundary() {
        let mut mask = Mask::new(5, 5).unwrap();
        mask.set(2, 2, true).unwrap();
        assert_eq!(Boundary::of(&mask).points(), &[(2, 2)]);
    }

    #[test]
    fn test_tiny_masks() {
        assert!(Boundary::of(&Mask::from_fn(1, 1, |_, _| true).unwrap()).is_empty());
        assert!(Boundary::of(&Mask::from_fn(2, 7, |_, _| true).unwrap()).is_empty());
    }
}
