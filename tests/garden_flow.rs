use rand::SeedableRng as _;
use rand_chacha::ChaCha8Rng;

use floret::{
    Canvas, Director, FlowerKind, PETAL_COUNT, SPARKLE_COUNT, Scene, SpawnConfig, Spawner,
    scene_to_svg,
};

fn visit_all(seed: u64) -> Scene {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut scene = Scene::with_all_containers();
    let mut director = Director::default();
    for screen in 1..=5 {
        director.screen_visible(&mut scene, screen, &mut rng);
    }
    scene
}

#[test]
fn full_session_produces_expected_population() {
    let scene = visit_all(7);
    let bed = scene.flower_bed.as_ref().unwrap();
    assert_eq!(bed.flowers.len(), 6 + 10 + 12 + 14 + 35);
    assert_eq!(scene.petal_layer.as_ref().unwrap().petals.len(), PETAL_COUNT);
    assert_eq!(
        scene.sparkle_layer.as_ref().unwrap().sparkles.len(),
        SPARKLE_COUNT
    );

    for flower in &bed.flowers {
        assert!((2.0..98.0).contains(&flower.x_percent));
        assert!((0.7..1.2).contains(&flower.scale));
        assert!((60.0..140.0).contains(&flower.stem_height));
        assert!(FlowerKind::ALL.contains(&flower.kind));
        let spec = flower.kind.spec();
        assert!(flower.variant_index < spec.variants.len());
    }
}

#[test]
fn same_seed_reproduces_the_same_svg() {
    let canvas = Canvas::new(800, 600).unwrap();
    let a = scene_to_svg(&visit_all(1234), canvas);
    let b = scene_to_svg(&visit_all(1234), canvas);
    let c = scene_to_svg(&visit_all(4321), canvas);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn revisits_in_any_order_spawn_nothing_new() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut scene = Scene::with_all_containers();
    let mut director = Director::default();

    let order = [3u32, 1, 3, 5, 2, 5, 1, 4, 2, 4];
    for screen in order {
        director.screen_visible(&mut scene, screen, &mut rng);
    }
    let bed = scene.flower_bed.as_ref().unwrap();
    assert_eq!(bed.flowers.len(), 77);
    assert_eq!(scene.petal_layer.as_ref().unwrap().petals.len(), PETAL_COUNT);
}

#[test]
fn custom_config_drives_counts_and_spacing() {
    let config: SpawnConfig = serde_json::from_str(
        r#"{
            "screen_counts": { "1": 3 },
            "default_count": 2,
            "min_distance": 10.0,
            "max_attempts": 50
        }"#,
    )
    .unwrap();
    config.validate().unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut spawner = Spawner::new(config);
    assert_eq!(spawner.spawn_flowers_for_screen(1, &mut rng).len(), 3);
    assert_eq!(spawner.spawn_flowers_for_screen(9, &mut rng).len(), 2);

    let occupied = spawner.occupied();
    for i in 0..occupied.len() {
        for j in (i + 1)..occupied.len() {
            assert!((occupied[i] - occupied[j]).abs() >= 10.0);
        }
    }
}

#[test]
fn unlisted_screen_uses_default_count_through_the_director() {
    let mut rng = ChaCha8Rng::seed_from_u64(10);
    let mut scene = Scene::with_all_containers();
    let mut director = Director::default();
    director.screen_visible(&mut scene, 7, &mut rng);
    assert_eq!(scene.flower_bed.as_ref().unwrap().flowers.len(), 8);
}
