//! Drifting orb-field simulation for the portal background.
//!
//! Pure state and arithmetic: the UI layer owns the frame cadence and
//! the painting, this module owns generation, per-frame advancement,
//! and wrap-around. Everything here runs without a rendering surface,
//! which keeps the animation loop testable in isolation.

use rand::Rng;

/// Orbs per batch; regenerated wholesale on every resize.
pub const ORB_COUNT: usize = 12;

/// How far past the viewport edge an orb's center may drift before it
/// wraps to the opposite side.
pub const WRAP_MARGIN: f64 = 200.0;

/// One soft radial-gradient blob in the background layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    /// Center position, viewport coordinates.
    pub x: f64,
    pub y: f64,
    /// Radius in pixels, 18..=120.
    pub radius: f64,
    /// Drift per frame, x in ±0.1, y in ±0.05.
    pub vx: f64,
    pub vy: f64,
    /// Hue in degrees, 180..=260 (cyan through violet).
    pub hue: f64,
    /// Peak opacity at the gradient center, 0.03..=0.12.
    pub alpha: f64,
}

/// The full orb batch plus the viewport it drifts across.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbField {
    width: f64,
    height: f64,
    orbs: Vec<Orb>,
}

impl OrbField {
    /// Generate a fresh field using the process RNG.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_rng(width, height, &mut rand::rng())
    }

    /// Generate a fresh field from an injected RNG.
    ///
    /// Panics if either dimension is not positive; callers gate on a
    /// measured viewport before constructing a field.
    pub fn with_rng(width: f64, height: f64, rng: &mut impl Rng) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "orb field needs a positive viewport, got {width}x{height}"
        );
        let orbs = (0..ORB_COUNT)
            .map(|_| Orb {
                x: rng.random_range(0.0..width),
                y: rng.random_range(0.0..height),
                radius: rng.random_range(18.0..120.0),
                vx: rng.random_range(-0.1..0.1),
                vy: rng.random_range(-0.05..0.05),
                hue: rng.random_range(180.0..260.0),
                alpha: rng.random_range(0.03..0.12),
            })
            .collect();
        Self {
            width,
            height,
            orbs,
        }
    }

    /// Rebuild a field from known parts. Seam for tests and benches
    /// that need orbs in specific positions.
    pub fn from_orbs(width: f64, height: f64, orbs: Vec<Orb>) -> Self {
        Self {
            width,
            height,
            orbs,
        }
    }

    /// Advance every orb by its velocity, wrapping any center that has
    /// drifted more than [`WRAP_MARGIN`] past the viewport bounds back
    /// to the opposite edge.
    pub fn step(&mut self) {
        for o in &mut self.orbs {
            o.x += o.vx;
            o.y += o.vy;
            if o.x < -WRAP_MARGIN {
                o.x = self.width + WRAP_MARGIN;
            }
            if o.x > self.width + WRAP_MARGIN {
                o.x = -WRAP_MARGIN;
            }
            if o.y < -WRAP_MARGIN {
                o.y = self.height + WRAP_MARGIN;
            }
            if o.y > self.height + WRAP_MARGIN {
                o.y = -WRAP_MARGIN;
            }
        }
    }

    /// Adopt new viewport dimensions and regenerate the batch. Old orbs
    /// are discarded, not interpolated.
    pub fn resize(&mut self, width: f64, height: f64) {
        *self = Self::new(width, height);
    }

    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_field(seed: u64) -> OrbField {
        let mut rng = StdRng::seed_from_u64(seed);
        OrbField::with_rng(1280.0, 800.0, &mut rng)
    }

    #[test]
    fn generates_exactly_twelve_orbs() {
        assert_eq!(seeded_field(1).orbs().len(), ORB_COUNT);
    }

    #[test]
    fn generated_parameters_stay_in_range() {
        for seed in 0..20 {
            for o in seeded_field(seed).orbs() {
                assert!((0.0..1280.0).contains(&o.x));
                assert!((0.0..800.0).contains(&o.y));
                assert!((18.0..120.0).contains(&o.radius));
                assert!((-0.1..0.1).contains(&o.vx));
                assert!((-0.05..0.05).contains(&o.vy));
                assert!((180.0..260.0).contains(&o.hue));
                assert!((0.03..0.12).contains(&o.alpha));
            }
        }
    }

    #[test]
    fn step_advances_by_velocity() {
        let orb = Orb {
            x: 100.0,
            y: 50.0,
            radius: 40.0,
            vx: 0.1,
            vy: -0.05,
            hue: 200.0,
            alpha: 0.1,
        };
        let mut field = OrbField::from_orbs(800.0, 600.0, vec![orb]);
        field.step();
        let moved = field.orbs()[0];
        assert!((moved.x - 100.1).abs() < 1e-9);
        assert!((moved.y - 49.95).abs() < 1e-9);
    }

    #[test]
    fn wraps_past_left_margin_to_right_edge() {
        let orb = Orb {
            x: -WRAP_MARGIN - 0.05,
            y: 300.0,
            radius: 40.0,
            vx: -0.1,
            vy: 0.0,
            hue: 200.0,
            alpha: 0.1,
        };
        let mut field = OrbField::from_orbs(800.0, 600.0, vec![orb]);
        field.step();
        assert_eq!(field.orbs()[0].x, 800.0 + WRAP_MARGIN);
    }

    #[test]
    fn wraps_past_bottom_margin_to_top_edge() {
        let orb = Orb {
            x: 400.0,
            y: 600.0 + WRAP_MARGIN + 0.01,
            radius: 40.0,
            vx: 0.0,
            vy: 0.05,
            hue: 200.0,
            alpha: 0.1,
        };
        let mut field = OrbField::from_orbs(800.0, 600.0, vec![orb]);
        field.step();
        assert_eq!(field.orbs()[0].y, -WRAP_MARGIN);
    }

    #[test]
    fn resize_regenerates_a_full_batch() {
        let mut field = seeded_field(7);
        let before = field.orbs().to_vec();
        field.resize(640.0, 480.0);
        assert_eq!(field.orbs().len(), ORB_COUNT);
        assert_eq!(field.width(), 640.0);
        assert_eq!(field.height(), 480.0);
        // A fresh batch, not the old orbs carried over
        assert_ne!(field.orbs(), &before[..]);
    }

    #[test]
    #[should_panic(expected = "positive viewport")]
    fn zero_viewport_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let _ = OrbField::with_rng(0.0, 600.0, &mut rng);
    }
}
