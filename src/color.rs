use rand::prelude::*;
use rand::rngs::StdRng;

use crate::geometry::Point;

/// Fill color of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Draws each channel uniformly from `0..255`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Rgb::new(rng.gen_range(0..255), rng.gen_range(0..255), rng.gen_range(0..255))
    }
}

/// How cell colors are assigned on every rebuild.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorPolicy {
    /// One generator lives across rebuilds, so every rebuild reshuffles all colors.
    Reshuffle { seed: u64 },
    /// Each color is derived from the site coordinates and stays stable across rebuilds.
    PerSite { seed: u64 },
}

impl Default for ColorPolicy {
    fn default() -> Self {
        ColorPolicy::Reshuffle { seed: get_seed() }
    }
}

/// The color source owned by a triangulation context.
#[derive(Clone, Debug)]
pub struct Palette {
    policy: ColorPolicy,
    rng: StdRng,
}

impl Palette {
    pub fn new(policy: ColorPolicy) -> Self {
        let seed = match policy {
            ColorPolicy::Reshuffle { seed } | ColorPolicy::PerSite { seed } => seed,
        };
        Self {
            policy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn policy(&self) -> ColorPolicy {
        self.policy
    }

    /// Color for the next cell of the current rebuild.
    pub fn next_color(&mut self, site: &Point) -> Rgb {
        match self.policy {
            ColorPolicy::Reshuffle { .. } => Rgb::random(&mut self.rng),
            ColorPolicy::PerSite { seed } => {
                let key = seed ^ site.x.to_bits().rotate_left(17) ^ site.y.to_bits();
                Rgb::random(&mut StdRng::seed_from_u64(key))
            }
        }
    }
}

/// Seed used when no explicit one is configured.
pub(crate) fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789
    }
}
