//! Generative color themes for nested borders
//!
//! A [`ColorTheme`] hands out one 256-color palette index per nesting
//! level. It is created by the caller for a single run and threaded through
//! the nesting sequencer by `&mut`; nothing here is process-global.
//!
//! Families:
//! - `random`: a random permutation of the 216 indices, restarting once
//!   every index has been used
//! - `gradient`: consecutive indices starting at a random offset
//! - `rainbow`: consecutive indices starting at 0
//! - flag palettes (`pride`, `trans`, `bi`, `pan`, `nb`): the palette
//!   repeated in order, never handing out an entry twice per cycle
//! - `solid`: the random start offset on every call

use std::collections::HashSet;

use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::color::Color;

/// Size of the index space themes draw from.
pub const PALETTE_SIZE: u8 = 216;

const PRIDE: &[u8] = &[196, 208, 226, 46, 21, 129];
const TRANS: &[u8] = &[51, 213, 15];
const BI: &[u8] = &[213, 129, 21];
const PAN: &[u8] = &[213, 226, 21];
const NB: &[u8] = &[226, 15, 129, 0];

/// Color theme families accepted by `--mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeFamily {
    Random,
    Gradient,
    Rainbow,
    Pride,
    Trans,
    Bi,
    Pan,
    Nb,
    /// One random color for every level
    Solid,
}

impl ThemeFamily {
    /// The literal palette of a flag family, `None` for generative ones.
    pub fn flag_palette(self) -> Option<&'static [u8]> {
        match self {
            ThemeFamily::Pride => Some(PRIDE),
            ThemeFamily::Trans => Some(TRANS),
            ThemeFamily::Bi => Some(BI),
            ThemeFamily::Pan => Some(PAN),
            ThemeFamily::Nb => Some(NB),
            ThemeFamily::Random
            | ThemeFamily::Gradient
            | ThemeFamily::Rainbow
            | ThemeFamily::Solid => None,
        }
    }
}

/// Per-run color theme state.
#[derive(Debug)]
pub struct ColorTheme {
    family: ThemeFamily,
    start: u8,
    /// Call counter for gradient/rainbow, palette cursor for flags.
    counter: usize,
    used: HashSet<u8>,
    rng: StdRng,
}

impl ColorTheme {
    /// Create a theme seeded from OS entropy.
    pub fn new(family: ThemeFamily) -> Self {
        Self::from_rng(family, StdRng::from_entropy())
    }

    /// Create a theme with a fixed seed, for reproducible output.
    pub fn with_seed(family: ThemeFamily, seed: u64) -> Self {
        Self::from_rng(family, StdRng::seed_from_u64(seed))
    }

    fn from_rng(family: ThemeFamily, mut rng: StdRng) -> Self {
        let start = rng.gen_range(0..PALETTE_SIZE);
        Self {
            family,
            start,
            counter: 0,
            used: HashSet::new(),
            rng,
        }
    }

    pub fn family(&self) -> ThemeFamily {
        self.family
    }

    /// The random offset drawn at construction.
    pub fn start_offset(&self) -> u8 {
        self.start
    }

    /// Produce the palette index for the next nesting level.
    pub fn next_index(&mut self) -> u8 {
        let index = match self.family {
            ThemeFamily::Random => self.next_random(),
            ThemeFamily::Gradient => {
                let index = (self.start as usize + self.counter) % PALETTE_SIZE as usize;
                self.counter += 1;
                index as u8
            }
            ThemeFamily::Rainbow => {
                let index = self.counter % PALETTE_SIZE as usize;
                self.counter += 1;
                index as u8
            }
            ThemeFamily::Solid => self.start,
            ThemeFamily::Pride
            | ThemeFamily::Trans
            | ThemeFamily::Bi
            | ThemeFamily::Pan
            | ThemeFamily::Nb => {
                let palette = self.family.flag_palette().unwrap_or(PRIDE);
                self.next_from_palette(palette)
            }
        };
        trace!(family = ?self.family, index, "color theme draw");
        index
    }

    /// Produce the next color as a terminal color.
    pub fn next_color(&mut self) -> Color {
        Color::Indexed(self.next_index())
    }

    fn next_random(&mut self) -> u8 {
        if self.used.len() >= PALETTE_SIZE as usize {
            self.used.clear();
        }
        loop {
            let candidate = self.rng.gen_range(0..PALETTE_SIZE);
            if self.used.insert(candidate) {
                return candidate;
            }
        }
    }

    /// Walk the palette from the cursor, skipping entries already handed out
    /// this cycle. The cursor ends one past the returned entry, so a fresh
    /// cycle resumes where the previous one left off, which for an
    /// exhausted palette is entry 0.
    fn next_from_palette(&mut self, palette: &[u8]) -> u8 {
        if self.used.len() >= palette.len() {
            self.used.clear();
        }

        for offset in 0..palette.len() {
            let position = (self.counter + offset) % palette.len();
            let candidate = palette[position];
            if self.used.insert(candidate) {
                self.counter = (position + 1) % palette.len();
                return candidate;
            }
        }

        // Only reachable if the palette repeats an entry.
        self.used.clear();
        self.used.insert(palette[0]);
        self.counter = 1 % palette.len();
        palette[0]
    }
}
