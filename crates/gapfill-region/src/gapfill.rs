//! Gap-aware seeded fill
//!
//! A plain flood fill leaks out of a hand-drawn outline through any break
//! in the stroke. The gap-aware fill detects leaks through breaks narrower
//! than a configured gap width and cuts them off:
//!
//! 1. `radius = round(gap / 2)`
//! 2. `naive` - flood fill of the raster from the seed
//! 3. `eroded` - `naive` eroded by a disk of `radius`; thin leaks through
//!    narrow breaks are severed
//! 4. `inside_eroded` - union of flood fills of `eroded` started from every
//!    surviving pixel in the `(2r + 1)²` block around the seed, so the
//!    interior is recovered even when the seed pixel itself was eroded
//! 5. `residual = eroded − inside_eroded` - the severed leak
//! 6. `restored` - `residual` dilated by the same disk
//! 7. `patched = naive − restored`
//! 8. final flood fill of `patched` from the seed
//!
//! A gap width of 0 gives radius 0, for which the result is the naive
//! fill.

use crate::error::{RegionError, RegionResult};
use crate::seedfill::{seed_fill, seed_fill_into, seed_xy};
use gapfill_core::{Mask, Raster, SeedPoint};
use gapfill_morph::{Boundary, Sel, dilate_with_boundary, erode_with_boundary};
use tracing::{debug, warn};

/// Default gap width in pixels.
pub const DEFAULT_GAP_WIDTH: u32 = 10;

/// Radius of the structuring element for a gap width: `gap / 2` with
/// halves rounded to even (1 → 0, 3 → 2, 5 → 2, 7 → 4).
pub fn gap_radius(gap_width: u32) -> u32 {
    let half = gap_width / 2;
    if gap_width % 2 == 1 && half % 2 == 1 {
        half + 1
    } else {
        half
    }
}

/// Options for the gap-aware fill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapFillOptions {
    /// Widest boundary break, in pixels, that is bridged
    pub gap_width: u32,
}

impl Default for GapFillOptions {
    fn default() -> Self {
        Self {
            gap_width: DEFAULT_GAP_WIDTH,
        }
    }
}

impl GapFillOptions {
    /// Create options from a caller-supplied gap width.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidGap`] for a negative width. Widths
    /// beyond `u32::MAX` saturate.
    pub fn new(gap_width: i64) -> RegionResult<Self> {
        if gap_width < 0 {
            return Err(RegionError::InvalidGap(gap_width));
        }
        let gap_width = u32::try_from(gap_width).unwrap_or(u32::MAX);
        Ok(Self { gap_width })
    }

    /// Set the gap width
    pub fn with_gap_width(mut self, gap_width: u32) -> Self {
        self.gap_width = gap_width;
        self
    }

    /// Structuring element radius derived from the gap width
    pub fn radius(&self) -> u32 {
        gap_radius(self.gap_width)
    }
}

/// How the filled region relates to its surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// The region is sealed and does not reach the image edge
    Enclosed,
    /// The region reaches the image edge: the outline is open wider than
    /// the gap width, or there is no outline at all
    ReachesBorder,
    /// Erosion consumed the interior around the seed, or patching removed
    /// the seed; the mask is empty
    Collapsed,
}

/// Every intermediate mask of one gap-aware fill.
#[derive(Debug, Clone)]
pub struct GapFillStages {
    /// Structuring element radius used, capped at `width + height`
    pub radius: u32,
    /// Unconstrained flood fill of the raster
    pub naive: Mask,
    /// `naive` after erosion
    pub eroded: Mask,
    /// Interior recovered from `eroded` around the seed
    pub inside_eroded: Mask,
    /// `eroded − inside_eroded`
    pub residual: Mask,
    /// `residual` after dilation
    pub restored: Mask,
    /// `naive − restored`
    pub patched: Mask,
}

/// Result of a gap-aware fill
#[derive(Debug, Clone)]
pub struct GapFillResult {
    /// Filled region
    pub mask: Mask,
    /// Classification of the region
    pub outcome: FillOutcome,
}

impl GapFillResult {
    /// Number of filled pixels
    pub fn filled_count(&self) -> usize {
        self.mask.count()
    }
}

/// Gap-aware fill with fixed options.
///
/// # Examples
///
/// ```
/// use gapfill_core::{Raster, SeedPoint};
/// use gapfill_region::{FillOutcome, GapFill, GapFillOptions};
///
/// let raster = Raster::new_filled(32, 32, 0xFFFF_FFFF).unwrap();
/// let fill = GapFill::new(GapFillOptions::default().with_gap_width(6));
/// let result = fill.run(&raster, SeedPoint::new(16, 16)).unwrap();
/// assert_eq!(result.filled_count(), 32 * 32);
/// assert_eq!(result.outcome, FillOutcome::ReachesBorder);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GapFill {
    options: GapFillOptions,
}

impl GapFill {
    /// Create a gap-aware fill with the given options
    pub fn new(options: GapFillOptions) -> Self {
        Self { options }
    }

    /// Options in use
    pub fn options(&self) -> &GapFillOptions {
        &self.options
    }

    /// Fill the region around `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidSeed`] if the seed is outside the image.
    pub fn run(&self, raster: &Raster, seed: SeedPoint) -> RegionResult<GapFillResult> {
        let stages = self.stages(raster, seed)?;
        self.finish(&stages, seed)
    }

    /// Run steps 1-7 and return every intermediate mask.
    ///
    /// The radius is capped at `width + height`: beyond that the disk
    /// already covers every offset inside the image, so the masks do not
    /// change.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidSeed`] if the seed is outside the image,
    /// or a morphology error if the capped radius still exceeds
    /// [`gapfill_morph::sel::MAX_DISK_RADIUS`].
    pub fn stages(&self, raster: &Raster, seed: SeedPoint) -> RegionResult<GapFillStages> {
        let (w, h) = (raster.width(), raster.height());
        seed_xy(seed, w, h)?;

        // Past w + h every in-image offset is already a disk hit
        let radius = self.options.radius().min(w.saturating_add(h));
        let naive = seed_fill(raster, seed)?;
        debug!(
            gap_width = self.options.gap_width,
            radius,
            naive = naive.count(),
            "naive fill"
        );

        if radius == 0 {
            let empty = naive.create_template();
            return Ok(GapFillStages {
                radius,
                eroded: naive.clone(),
                inside_eroded: naive.clone(),
                residual: empty.clone(),
                restored: empty,
                patched: naive.clone(),
                naive,
            });
        }

        let sel = Sel::create_disk(radius)?;
        let eroded = erode_with_boundary(&naive, &Boundary::of(&naive), &sel)?;

        let mut inside_eroded = eroded.create_template();
        let r = i64::from(radius);
        // Offsets limited to the image
        let drows = (-r).max(-seed.row())..=r.min(i64::from(h) - 1 - seed.row());
        let dcols = (-r).max(-seed.col())..=r.min(i64::from(w) - 1 - seed.col());
        for drow in drows {
            for dcol in dcols.clone() {
                let start = seed.offset(drow, dcol);
                let Some((x, y)) = start.to_xy(w, h) else {
                    continue;
                };
                if eroded.get(x, y) {
                    seed_fill_into(&eroded, start, &mut inside_eroded)?;
                }
            }
        }

        let residual = eroded.subtract(&inside_eroded)?;
        let restored = dilate_with_boundary(&residual, &Boundary::of(&residual), &sel)?;
        let patched = naive.subtract(&restored)?;
        debug!(
            eroded = eroded.count(),
            inside_eroded = inside_eroded.count(),
            residual = residual.count(),
            restored = restored.count(),
            patched = patched.count(),
            "gap patching"
        );

        Ok(GapFillStages {
            radius,
            naive,
            eroded,
            inside_eroded,
            residual,
            restored,
            patched,
        })
    }

    /// Step 8: confine the patched mask to the seed's component.
    ///
    /// `stages` must come from [`GapFill::stages`] for the same seed. The
    /// outcome is [`FillOutcome::Collapsed`] with an empty mask when no
    /// eroded interior was found around the seed, even if the seed itself
    /// survived patching, or when patching removed the seed.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidSeed`] if the seed is outside the image.
    pub fn finish(&self, stages: &GapFillStages, seed: SeedPoint) -> RegionResult<GapFillResult> {
        let patched = &stages.patched;
        let (x, y) = seed_xy(seed, patched.width(), patched.height())?;

        if stages.inside_eroded.is_empty() || !patched.get(x, y) {
            warn!(
                gap_width = self.options.gap_width,
                radius = stages.radius,
                %seed,
                "interior around the seed collapsed under erosion"
            );
            return Ok(GapFillResult {
                mask: patched.create_template(),
                outcome: FillOutcome::Collapsed,
            });
        }

        let mask = seed_fill(patched, seed)?;
        let outcome = if mask.touches_border() {
            FillOutcome::ReachesBorder
        } else {
            FillOutcome::Enclosed
        };
        debug!(filled = mask.count(), ?outcome, "final fill");

        Ok(GapFillResult { mask, outcome })
    }
}

/// Fill the region enclosing (`seed_row`, `seed_col`), bridging boundary
/// breaks narrower than `gap_width`.
///
/// The returned mask has the raster's size. A collapsed interior yields an
/// empty mask; use [`GapFill::run`] to tell that apart from other
/// outcomes.
///
/// # Errors
///
/// - [`RegionError::InvalidSeed`] if the seed is outside the image
/// - [`RegionError::InvalidGap`] if `gap_width` is negative
pub fn fill_with_gap(
    image: &Raster,
    seed_row: i64,
    seed_col: i64,
    gap_width: i64,
) -> RegionResult<Mask> {
    let options = GapFillOptions::new(gap_width)?;
    let result = GapFill::new(options).run(image, SeedPoint::new(seed_row, seed_col))?;
    Ok(result.mask)
}
