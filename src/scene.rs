//! Scene containers and the visibility director.
//!
//! The hosting application owns viewport-visibility detection; this module is
//! the glue it calls into. A [`Scene`] holds the three containers generated
//! elements land in, and a [`Director`] turns "screen N became visible"
//! notifications into spawner calls, firing the one-shot particle batches
//! when the final screen first comes into view.

use rand::Rng;

use crate::{
    error::{FloretError, FloretResult},
    particles::{Petal, Sparkle, spawn_heart_sparkles, spawn_petals},
    spawn::{Flower, SpawnConfig, Spawner},
};

pub const DEFAULT_FINAL_SCREEN: u32 = 5;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlowerBed {
    pub flowers: Vec<Flower>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PetalLayer {
    pub petals: Vec<Petal>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SparkleLayer {
    pub sparkles: Vec<Sparkle>,
}

/// The containers generated elements are appended into. A container that is
/// absent makes the spawn that targets it a no-op; nothing is created for it
/// and no error is raised.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub flower_bed: Option<FlowerBed>,
    pub petal_layer: Option<PetalLayer>,
    pub sparkle_layer: Option<SparkleLayer>,
}

impl Scene {
    pub fn with_all_containers() -> Self {
        Self {
            flower_bed: Some(FlowerBed::default()),
            petal_layer: Some(PetalLayer::default()),
            sparkle_layer: Some(SparkleLayer::default()),
        }
    }

    pub fn to_json_pretty(&self) -> FloretResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FloretError::serde(e.to_string()))
    }

    pub fn from_json(json: &str) -> FloretResult<Self> {
        serde_json::from_str(json).map_err(|e| FloretError::serde(e.to_string()))
    }
}

/// Reacts to screen-visibility events. Visibility may fire repeatedly for the
/// same screen as the user scrolls back and forth; the spawner's registry and
/// the particle one-shot flag make re-entry harmless.
#[derive(Clone, Debug)]
pub struct Director {
    spawner: Spawner,
    final_screen: u32,
    particles_spawned: bool,
}

impl Default for Director {
    fn default() -> Self {
        Self::new(SpawnConfig::default())
    }
}

impl Director {
    pub fn new(config: SpawnConfig) -> Self {
        Self {
            spawner: Spawner::new(config),
            final_screen: DEFAULT_FINAL_SCREEN,
            particles_spawned: false,
        }
    }

    pub fn with_final_screen(mut self, screen: u32) -> Self {
        self.final_screen = screen;
        self
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    pub fn particles_spawned(&self) -> bool {
        self.particles_spawned
    }

    /// Handle a "screen became visible" notification.
    #[tracing::instrument(skip(self, scene, rng))]
    pub fn screen_visible<R: Rng + ?Sized>(&mut self, scene: &mut Scene, screen: u32, rng: &mut R) {
        let batch = self.spawner.spawn_flowers_for_screen(screen, rng);
        match scene.flower_bed.as_mut() {
            Some(bed) => bed.flowers.extend(batch),
            None => {
                if !batch.is_empty() {
                    tracing::debug!(screen, "no flower bed container; dropping batch");
                }
            }
        }

        if screen == self.final_screen && !self.particles_spawned {
            if let Some(layer) = scene.petal_layer.as_mut() {
                layer.petals.extend(spawn_petals(rng));
            }
            if let Some(layer) = scene.sparkle_layer.as_mut() {
                layer.sparkles.extend(spawn_heart_sparkles(rng));
            }
            self.particles_spawned = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::particles::{PETAL_COUNT, SPARKLE_COUNT};

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn visible_screen_fills_the_bed_once() {
        let mut rng = rng(31);
        let mut scene = Scene::with_all_containers();
        let mut director = Director::default();

        director.screen_visible(&mut scene, 1, &mut rng);
        assert_eq!(scene.flower_bed.as_ref().unwrap().flowers.len(), 6);

        // Scrolling back re-fires visibility; nothing new appears.
        director.screen_visible(&mut scene, 1, &mut rng);
        assert_eq!(scene.flower_bed.as_ref().unwrap().flowers.len(), 6);

        director.screen_visible(&mut scene, 2, &mut rng);
        assert_eq!(scene.flower_bed.as_ref().unwrap().flowers.len(), 16);
    }

    #[test]
    fn final_screen_triggers_particles_exactly_once() {
        let mut rng = rng(32);
        let mut scene = Scene::with_all_containers();
        let mut director = Director::default();

        director.screen_visible(&mut scene, 4, &mut rng);
        assert!(!director.particles_spawned());
        assert!(scene.petal_layer.as_ref().unwrap().petals.is_empty());

        director.screen_visible(&mut scene, 5, &mut rng);
        assert!(director.particles_spawned());
        assert_eq!(scene.petal_layer.as_ref().unwrap().petals.len(), PETAL_COUNT);
        assert_eq!(
            scene.sparkle_layer.as_ref().unwrap().sparkles.len(),
            SPARKLE_COUNT
        );

        director.screen_visible(&mut scene, 5, &mut rng);
        assert_eq!(scene.petal_layer.as_ref().unwrap().petals.len(), PETAL_COUNT);
    }

    #[test]
    fn missing_containers_no_op() {
        let mut rng = rng(33);
        let mut scene = Scene::default();
        let mut director = Director::default();

        director.screen_visible(&mut scene, 1, &mut rng);
        director.screen_visible(&mut scene, 5, &mut rng);
        assert_eq!(scene, Scene::default());
        // The screen still counts as handled, matching the original engine.
        assert!(director.spawner().is_screen_spawned(1));
        assert!(director.particles_spawned());
    }

    #[test]
    fn custom_final_screen_is_honored() {
        let mut rng = rng(34);
        let mut scene = Scene::with_all_containers();
        let mut director = Director::default().with_final_screen(3);

        director.screen_visible(&mut scene, 5, &mut rng);
        assert!(scene.petal_layer.as_ref().unwrap().petals.is_empty());

        director.screen_visible(&mut scene, 3, &mut rng);
        assert_eq!(scene.petal_layer.as_ref().unwrap().petals.len(), PETAL_COUNT);
    }

    #[test]
    fn scene_survives_json_roundtrip() {
        let mut rng = rng(35);
        let mut scene = Scene::with_all_containers();
        let mut director = Director::default();
        director.screen_visible(&mut scene, 5, &mut rng);

        let s = scene.to_json_pretty().unwrap();
        let de = Scene::from_json(&s).unwrap();
        assert_eq!(de, scene);
    }

    #[test]
    fn scene_from_json_reports_serde_errors() {
        let err = Scene::from_json("[flowers]").unwrap_err();
        assert!(err.to_string().contains("serialization error:"));
    }
}
