//! Common test utilities for the gridnav test suite.
#![allow(dead_code)]

use gridnav::{
    GridLayout, GridWorld, Position, StartMode, WorldConfig,
    grid::reference::{REFERENCE_GOAL, reference_layout},
};
use rand::RngCore;

/// Legacy state-id table for the reference map (-1 marks a wall).
pub const LEGACY_STATE_MAP: [[i64; 15]; 12] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14],
    [15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29],
    [30, 31, -1, -1, -1, 32, -1, -1, -1, 33, 34, 35, 36, 37, 38],
    [39, 40, -1, 41, 42, 43, 44, 45, -1, 46, 47, 48, -1, -1, 49],
    [50, 51, -1, 52, 53, 54, 55, 56, 57, 58, 59, -1, -1, -1, 60],
    [61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75],
    [76, 77, 78, 79, 80, 81, 82, 83, -1, -1, 84, 85, 86, 87, 88],
    [89, 90, -1, -1, -1, 91, 92, 93, 94, -1, -1, -1, 95, 96, -1],
    [97, 98, -1, 99, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110],
    [111, 112, -1, 113, 114, 115, -1, 116, 117, -1, -1, -1, -1, 118, 119],
    [120, 121, 122, 123, 124, 125, 126, 127, 128, 129, 130, 131, 132, 133, 134],
    [135, 136, 137, 138, -1, -1, -1, 139, 140, 141, 142, 143, 144, 145, -1],
];

/// Random source that returns the same word forever.
///
/// `ConstRng(0)` draws 0.0 from `random::<f64>()`, so every action with a
/// positive success probability is attempted. `ConstRng(u64::MAX)` draws
/// just under 1.0, so any success probability below 1 slips.
#[derive(Debug, Clone)]
pub struct ConstRng(pub u64);

impl RngCore for ConstRng {
    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for (i, byte) in dst.iter_mut().enumerate() {
            *byte = self.0.to_le_bytes()[i % 8];
        }
    }
}

pub fn reference() -> GridLayout {
    reference_layout().unwrap()
}

/// Reference world starting at (0,0) with a seeded random source.
pub fn reference_world(seed: u64) -> GridWorld {
    GridWorld::new(reference(), WorldConfig::new(REFERENCE_GOAL).with_seed(seed)).unwrap()
}

/// Reference world that resets to `start` and draws from `ConstRng(word)`.
pub fn world_at(start: Position, word: u64) -> GridWorld<ConstRng> {
    let config = WorldConfig::new(REFERENCE_GOAL).with_start(StartMode::Fixed(start));
    let mut world = GridWorld::with_rng(reference(), config, ConstRng(word)).unwrap();
    world.reset();
    world
}
