//! Flower placement and per-screen spawning.
//!
//! A [`Spawner`] owns the session state the page accumulates while the user
//! scrolls: every horizontal position already handed out (so new flowers do
//! not visually overlap) and the set of screens whose batch has already been
//! emitted. Both only grow for the life of the spawner; [`Spawner::reset`]
//! is the explicit teardown.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;

use crate::{
    error::{FloretError, FloretResult},
    flora::FlowerKind,
    heads,
    svg::SvgDoc,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpawnConfig {
    /// Flowers per screen number; screens not listed get `default_count`.
    pub screen_counts: BTreeMap<u32, usize>,
    pub default_count: usize,
    /// Minimum horizontal spacing between flower centers, in percent of
    /// container width.
    pub min_distance: f64,
    /// Placement attempts before giving up on the spacing constraint.
    pub max_attempts: u32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            screen_counts: BTreeMap::from([(1, 6), (2, 10), (3, 12), (4, 14), (5, 35)]),
            default_count: 8,
            min_distance: 3.5,
            max_attempts: 50,
        }
    }
}

impl SpawnConfig {
    /// Parse a configuration from JSON, e.g. a per-deployment counts table.
    pub fn from_json(json: &str) -> FloretResult<Self> {
        serde_json::from_str(json).map_err(|e| FloretError::serde(e.to_string()))
    }

    pub fn count_for_screen(&self, screen: u32) -> usize {
        self.screen_counts
            .get(&screen)
            .copied()
            .unwrap_or(self.default_count)
    }

    pub fn validate(&self) -> FloretResult<()> {
        if !self.min_distance.is_finite() || self.min_distance <= 0.0 {
            return Err(FloretError::validation("min_distance must be > 0"));
        }
        if self.max_attempts == 0 {
            return Err(FloretError::validation("max_attempts must be > 0"));
        }
        Ok(())
    }
}

/// Which sway keyframe animation a flower uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwayStyle {
    Sway,
    SwayWide,
}

impl SwayStyle {
    pub fn class_name(self) -> &'static str {
        match self {
            SwayStyle::Sway => "sway",
            SwayStyle::SwayWide => "sway-wide",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafSide {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Leaf {
    pub side: LeafSide,
    /// Vertical offset down the stem, percent of stem height.
    pub top_percent: f64,
}

/// One emitted flower: fully determined at creation, never mutated after.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Flower {
    pub kind: FlowerKind,
    pub variant_index: usize,
    /// Horizontal position, percent of container width.
    pub x_percent: f64,
    /// Stem height in px.
    pub stem_height: f64,
    pub scale: f64,
    pub sway: SwayStyle,
    pub sway_duration: f64,
    pub sway_delay: f64,
    pub grow_delay: f64,
    pub leaves: Vec<Leaf>,
    pub head: SvgDoc,
}

#[derive(Clone, Debug, Default)]
pub struct Spawner {
    config: SpawnConfig,
    occupied: Vec<f64>,
    spawned_screens: BTreeSet<u32>,
}

impl Spawner {
    pub fn new(config: SpawnConfig) -> Self {
        Self {
            config,
            occupied: Vec::new(),
            spawned_screens: BTreeSet::new(),
        }
    }

    pub fn config(&self) -> &SpawnConfig {
        &self.config
    }

    /// Positions handed out so far, in percent of container width.
    pub fn occupied(&self) -> &[f64] {
        &self.occupied
    }

    /// Drop all placement records and the screen registry.
    pub fn reset(&mut self) {
        self.occupied.clear();
        self.spawned_screens.clear();
    }

    fn is_position_free(&self, x: f64) -> bool {
        self.occupied
            .iter()
            .all(|ox| (x - ox).abs() >= self.config.min_distance)
    }

    /// Draw a horizontal position in [2, 98] that keeps `min_distance` from
    /// every earlier placement, retrying up to `max_attempts` times.
    ///
    /// Collision avoidance is soft: once the attempt budget is spent, one
    /// final draw is accepted without re-checking the constraint, so densely
    /// packed beds may overlap. The accepted position is always recorded.
    pub fn find_free_position<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        for _ in 0..self.config.max_attempts {
            let x = rng.random_range(2.0..98.0);
            if self.is_position_free(x) {
                self.occupied.push(x);
                return x;
            }
        }
        let x = rng.random_range(2.0..98.0);
        self.occupied.push(x);
        x
    }

    /// Build one flower at `x_percent`. Returns `None` when `kind_name` does
    /// not name a registered kind; the slot is simply skipped.
    pub fn create_flower<R: Rng + ?Sized>(
        &self,
        kind_name: &str,
        x_percent: f64,
        rng: &mut R,
    ) -> Option<Flower> {
        let kind = FlowerKind::from_name(kind_name)?;
        Some(self.create_flower_of(kind, x_percent, rng))
    }

    pub fn create_flower_of<R: Rng + ?Sized>(
        &self,
        kind: FlowerKind,
        x_percent: f64,
        rng: &mut R,
    ) -> Flower {
        let spec = kind.spec();
        let variant_index = rng.random_range(0..spec.variants.len());
        let stem_height = rng.random_range(60.0..140.0);
        let sway_duration = rng.random_range(2.5..5.5);
        let sway_delay = rng.random_range(0.0..2.0);
        let grow_delay = rng.random_range(0.0..0.6);
        let scale = rng.random_range(0.7..1.2);
        let sway = if rng.random_bool(0.5) {
            SwayStyle::Sway
        } else {
            SwayStyle::SwayWide
        };

        let head = heads::head_svg(kind, &spec.variants[variant_index], rng);

        let leaf_count = rng.random_range(1..=2);
        let leaves = (0..leaf_count)
            .map(|i| Leaf {
                side: if i == 0 { LeafSide::Left } else { LeafSide::Right },
                top_percent: rng.random_range(30.0..70.0),
            })
            .collect();

        Flower {
            kind,
            variant_index,
            x_percent,
            stem_height,
            scale,
            sway,
            sway_duration,
            sway_delay,
            grow_delay,
            leaves,
            head,
        }
    }

    /// Record `screen` as spawned. Returns `false` if it already was.
    pub fn register_screen(&mut self, screen: u32) -> bool {
        self.spawned_screens.insert(screen)
    }

    pub fn is_screen_spawned(&self, screen: u32) -> bool {
        self.spawned_screens.contains(&screen)
    }

    /// Emit the flower batch for `screen`. Idempotent: a screen that has
    /// already spawned yields an empty batch. Each flower's grow-in delay is
    /// staggered by its index so the bed fills progressively.
    #[tracing::instrument(skip(self, rng))]
    pub fn spawn_flowers_for_screen<R: Rng + ?Sized>(
        &mut self,
        screen: u32,
        rng: &mut R,
    ) -> Vec<Flower> {
        if !self.register_screen(screen) {
            return Vec::new();
        }

        let count = self.config.count_for_screen(screen);
        let mut batch = Vec::with_capacity(count);
        for i in 0..count {
            let kind = FlowerKind::ALL[rng.random_range(0..FlowerKind::ALL.len())];
            let x = self.find_free_position(rng);
            let mut flower = self.create_flower_of(kind, x, rng);
            flower.grow_delay = (i as f64) * 0.08 + rng.random_range(0.0..0.3);
            batch.push(flower);
        }

        tracing::debug!(screen, flowers = batch.len(), "spawned flower batch");
        batch
    }
}
