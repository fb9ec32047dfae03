use std::f32::consts::TAU;

use egui::Color32;
use uuid::Uuid;

/// Source of the random values the sketchpad needs: marker colours and
/// sticker rotations.
pub trait RandomSource: Send {
    /// A value uniformly distributed in `[0, 1)`.
    fn next_unit(&mut self) -> f32;

    /// An opaque colour with independently random channels.
    fn next_color(&mut self) -> Color32 {
        let mut channel = || (self.next_unit() * 256.0).min(255.0) as u8;
        let (r, g, b) = (channel(), channel(), channel());
        Color32::from_rgb(r, g, b)
    }

    /// An angle in radians, in `[0, 2π)`.
    fn next_angle(&mut self) -> f32 {
        self.next_unit() * TAU
    }
}

/// Draws its entropy from v4 uuids, which are backed by the OS (or the
/// browser's `crypto.getRandomValues` on wasm).
///
/// Stands in for a `rand` generator: uuid's `getrandom` is already the
/// entropy source in the dependency tree, and a few values per click is all
/// the sketchpad asks for.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidRandom;

impl RandomSource for UuidRandom {
    fn next_unit(&mut self) -> f32 {
        let bits = Uuid::new_v4().as_u128() as u32;
        // 24 bits keeps the result exactly representable and below 1.0
        (bits >> 8) as f32 / (1u32 << 24) as f32
    }
}

/// Replays a fixed list of unit values in a loop. Used to make colours and
/// rotations reproducible.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 0.999_999)
    }
}
