//! Tunable values and their allowed ranges.

use core::fmt::Debug;

use crate::path::PathError::{OutOfRange, UnknownSetting};
use crate::path::PathResult;

pub const DEFAULT_ARCS: usize = 8;
pub const MAX_ARCS: usize = 300;
pub const DEFAULT_SEGMENTS: usize = 80;
pub const MAX_SEGMENTS: usize = 300;
pub const DEFAULT_TIME_MULTIPLIER: u32 = 50;
pub const MAX_TIME_MULTIPLIER: u32 = 900;

/// A named value constrained to an inclusive range.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Setting<T> {
    pub name: &'static str,
    pub range: (T, T),
    value: T,
    default: T,
}

impl<T: Copy + PartialOrd + Debug> Setting<T> {
    /// `default` is expected to lie inside `range`.
    pub fn new(name: &'static str, default: T, range: (T, T)) -> Self {
        Self {
            name,
            range,
            value: default,
            default,
        }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn default_value(&self) -> T {
        self.default
    }

    pub fn contains(&self, value: T) -> bool {
        self.range.0 <= value && value <= self.range.1
    }

    /// Out of range values are rejected, never clamped.
    pub fn set(&mut self, value: T) -> PathResult<()> {
        if self.contains(value) {
            self.value = value;
            Ok(())
        } else {
            log::warn!(
                "rejected {} = {:?}: allowed range is {:?} to {:?}",
                self.name,
                value,
                self.range.0,
                self.range.1,
            );
            Err(OutOfRange)
        }
    }

    pub fn reset(&mut self) {
        self.value = self.default;
    }
}

/// Shape of the next generated path. Changing it never
/// affects a path that already exists.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PathConfig {
    pub arcs: Setting<usize>,
    pub segments: Setting<usize>,
}

impl PathConfig {
    pub fn new() -> Self {
        Self {
            arcs: Setting::new("arcs", DEFAULT_ARCS, (1, MAX_ARCS)),
            segments: Setting::new("segments", DEFAULT_SEGMENTS, (2, MAX_SEGMENTS)),
        }
    }

    pub fn arcs(&self) -> usize {
        self.arcs.value()
    }

    pub fn segments(&self) -> usize {
        self.segments.value()
    }

    pub fn set_arcs(&mut self, arcs: usize) -> PathResult<()> {
        self.arcs.set(arcs)
    }

    pub fn set_segments(&mut self, segments: usize) -> PathResult<()> {
        self.segments.set(segments)
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.settings().iter().find(|s| s.name == name).map(|s| s.value())
    }

    pub fn set(&mut self, name: &str, value: usize) -> PathResult<()> {
        match name {
            n if n == self.arcs.name => self.arcs.set(value),
            n if n == self.segments.name => self.segments.set(value),
            _ => Err(UnknownSetting),
        }
    }

    pub fn settings(&self) -> [Setting<usize>; 2] {
        [self.arcs, self.segments]
    }

    /// Restores the default arc and segment counts.
    pub fn reset(&mut self) {
        self.arcs.reset();
        self.segments.reset();
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self::new()
    }
}
