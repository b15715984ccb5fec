use rand::SeedableRng as _;
use rand_chacha::ChaCha8Rng;

use floret::{Canvas, Director, Scene, raster::rasterize_svg, scene_to_svg};

#[test]
fn composed_scene_svg_rasterizes() {
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let mut scene = Scene::with_all_containers();
    let mut director = Director::default();
    for screen in 1..=5 {
        director.screen_visible(&mut scene, screen, &mut rng);
    }

    let canvas = Canvas::new(320, 180).unwrap();
    let svg = scene_to_svg(&scene, canvas);
    let img = rasterize_svg(&svg, canvas.width, canvas.height).unwrap();
    assert_eq!(img.dimensions(), (320, 180));

    // A full bed plus particles must leave visible pixels somewhere.
    let painted = img.pixels().filter(|p| p[3] > 0).count();
    assert!(painted > 0, "rasterized scene is fully transparent");
}

#[test]
fn empty_scene_rasterizes_transparent() {
    let canvas = Canvas::new(64, 64).unwrap();
    let svg = scene_to_svg(&Scene::default(), canvas);
    let img = rasterize_svg(&svg, 64, 64).unwrap();
    assert!(img.pixels().all(|p| p[3] == 0));
}
