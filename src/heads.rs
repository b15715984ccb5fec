//! Flower head rendering: pure functions from (kind, palette) to an
//! [`SvgDoc`]. Rose, tulip and poppy are fixed shape compositions; daisy,
//! sunflower, lily and cherry generate N petals at evenly spaced rotation
//! angles around the head center; lavender stacks florets up the stalk.

use rand::Rng;

use crate::{
    flora::{ColorRole, FlowerKind, Palette},
    svg::{Rotation, Stroke, SvgDoc, SvgNode},
};

/// Generate the head graphic for one flower. The RNG is only consumed by
/// lavender (per-floret opacity); every other kind is deterministic in the
/// palette.
pub fn head_svg<R: Rng + ?Sized>(kind: FlowerKind, palette: &Palette, rng: &mut R) -> SvgDoc {
    match kind {
        FlowerKind::Rose => rose(palette),
        FlowerKind::Tulip => tulip(palette),
        FlowerKind::Daisy => daisy(palette),
        FlowerKind::Sunflower => sunflower(palette),
        FlowerKind::Lily => lily(palette),
        FlowerKind::Lavender => lavender(palette, rng),
        FlowerKind::Poppy => poppy(palette),
        FlowerKind::Cherry => cherry(palette),
    }
}

fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64, fill: &str, opacity: Option<f64>) -> SvgNode {
    SvgNode::Ellipse {
        cx,
        cy,
        rx,
        ry,
        fill: fill.to_string(),
        opacity,
        stroke: None,
        rotate: None,
    }
}

fn circle(cx: f64, cy: f64, r: f64, fill: &str, opacity: Option<f64>) -> SvgNode {
    SvgNode::Circle {
        cx,
        cy,
        r,
        fill: fill.to_string(),
        opacity,
    }
}

fn rotated_petal(
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    fill: &str,
    opacity: f64,
    degrees: f64,
    pivot: (f64, f64),
    stroke: Option<Stroke>,
) -> SvgNode {
    SvgNode::Ellipse {
        cx,
        cy,
        rx,
        ry,
        fill: fill.to_string(),
        opacity: Some(opacity),
        stroke,
        rotate: Some(Rotation {
            degrees,
            cx: pivot.0,
            cy: pivot.1,
        }),
    }
}

fn rose(p: &Palette) -> SvgDoc {
    let primary = p.color(ColorRole::Primary);
    let secondary = p.color(ColorRole::Secondary);
    let center = p.color(ColorRole::Center);

    let mut doc = SvgDoc::new(32.0, 30.0);
    doc.push(ellipse(16.0, 15.0, 14.0, 13.0, primary, None));
    doc.push(rotated_petal(
        12.0, 12.0, 8.0, 10.0, secondary, 0.7, -15.0, (12.0, 12.0), None,
    ));
    doc.push(rotated_petal(
        20.0, 12.0, 8.0, 10.0, secondary, 0.7, 15.0, (20.0, 12.0), None,
    ));
    doc.push(ellipse(16.0, 10.0, 6.0, 7.0, primary, Some(0.8)));
    doc.push(ellipse(16.0, 13.0, 4.0, 5.0, center, Some(0.6)));
    doc.push(circle(16.0, 14.0, 3.0, center, Some(0.4)));
    doc
}

fn tulip(p: &Palette) -> SvgDoc {
    let primary = p.color(ColorRole::Primary);
    let secondary = p.color(ColorRole::Secondary);

    let mut doc = SvgDoc::new(26.0, 30.0);
    doc.push(SvgNode::Path {
        d: "M13 28 C8 20, 2 15, 4 6 C5 2, 9 0, 13 2".to_string(),
        fill: primary.to_string(),
        opacity: None,
    });
    doc.push(SvgNode::Path {
        d: "M13 28 C18 20, 24 15, 22 6 C21 2, 17 0, 13 2".to_string(),
        fill: secondary.to_string(),
        opacity: None,
    });
    doc.push(SvgNode::Path {
        d: "M13 28 C11 18, 10 10, 13 2 C16 10, 15 18, 13 28".to_string(),
        fill: primary.to_string(),
        opacity: Some(0.6),
    });
    doc
}

fn daisy(p: &Palette) -> SvgDoc {
    let petal = p.color(ColorRole::Petal);
    let center = p.color(ColorRole::Center);

    let mut doc = SvgDoc::new(34.0, 34.0);
    let count = 12;
    for i in 0..count {
        let angle = (360.0 / f64::from(count)) * f64::from(i);
        doc.push(rotated_petal(
            17.0, 6.0, 3.0, 8.0, petal, 0.9, angle, (17.0, 17.0), None,
        ));
    }
    doc.push(circle(17.0, 17.0, 5.5, center, None));
    doc.push(circle(17.0, 17.0, 3.0, center, Some(0.7)));
    doc
}

fn sunflower(p: &Palette) -> SvgDoc {
    let petal = p.color(ColorRole::Petal);
    let center = p.color(ColorRole::Center);

    let mut doc = SvgDoc::new(40.0, 40.0);
    let count = 18;
    for i in 0..count {
        let angle = (360.0 / f64::from(count)) * f64::from(i);
        doc.push(rotated_petal(
            20.0, 5.0, 3.5, 9.0, petal, 0.9, angle, (20.0, 20.0), None,
        ));
    }
    doc.push(circle(20.0, 20.0, 8.0, center, None));
    // Seed speckles.
    doc.push(circle(18.0, 18.0, 1.0, "#3e2723", Some(0.5)));
    doc.push(circle(22.0, 19.0, 1.0, "#3e2723", Some(0.5)));
    doc.push(circle(20.0, 22.0, 1.0, "#3e2723", Some(0.5)));
    doc.push(circle(17.0, 21.0, 0.8, "#3e2723", Some(0.4)));
    doc.push(circle(23.0, 17.0, 0.8, "#3e2723", Some(0.4)));
    doc
}

fn lily(p: &Palette) -> SvgDoc {
    let primary = p.color(ColorRole::Primary);
    let secondary = p.color(ColorRole::Secondary);
    let stamen = p.color(ColorRole::Stamen);

    let mut doc = SvgDoc::new(36.0, 32.0);
    for i in 0..6 {
        let angle = 60.0 * f64::from(i);
        doc.push(rotated_petal(
            18.0,
            5.0,
            5.0,
            12.0,
            primary,
            0.85,
            angle,
            (18.0, 16.0),
            Some(Stroke {
                color: secondary.to_string(),
                width: 0.5,
            }),
        ));
    }
    doc.push(circle(18.0, 16.0, 3.0, stamen, Some(0.7)));
    let stamen_stroke = |x2: f64, y2: f64| SvgNode::Line {
        x1: 18.0,
        y1: 13.0,
        x2,
        y2,
        stroke: Stroke {
            color: stamen.to_string(),
            width: 1.0,
        },
        opacity: Some(0.5),
    };
    doc.push(stamen_stroke(16.0, 9.0));
    doc.push(stamen_stroke(20.0, 9.0));
    doc.push(stamen_stroke(18.0, 8.0));
    doc
}

fn lavender<R: Rng + ?Sized>(p: &Palette, rng: &mut R) -> SvgDoc {
    let primary = p.color(ColorRole::Primary);
    let secondary = p.color(ColorRole::Secondary);

    let mut doc = SvgDoc::new(14.0, 40.0);
    for i in 0..8 {
        let y = 4.0 + f64::from(i) * 4.5;
        let offset = if i % 2 == 0 { -1.0 } else { 1.0 };
        let opacity = rng.random_range(0.6..1.0);
        doc.push(ellipse(7.0 + offset, y, 4.0, 2.5, primary, Some(opacity)));
    }
    doc.push(ellipse(7.0, 2.0, 2.5, 2.0, secondary, Some(0.8)));
    doc
}

fn poppy(p: &Palette) -> SvgDoc {
    let primary = p.color(ColorRole::Primary);
    let secondary = p.color(ColorRole::Secondary);
    let center = p.color(ColorRole::Center);

    let mut doc = SvgDoc::new(36.0, 34.0);
    doc.push(rotated_petal(
        10.0, 12.0, 10.0, 12.0, primary, 0.85, -10.0, (10.0, 12.0), None,
    ));
    doc.push(rotated_petal(
        26.0, 12.0, 10.0, 12.0, secondary, 0.85, 10.0, (26.0, 12.0), None,
    ));
    doc.push(rotated_petal(
        10.0, 22.0, 10.0, 11.0, secondary, 0.8, 10.0, (10.0, 22.0), None,
    ));
    doc.push(rotated_petal(
        26.0, 22.0, 10.0, 11.0, primary, 0.8, -10.0, (26.0, 22.0), None,
    ));
    doc.push(circle(18.0, 17.0, 5.0, center, None));
    doc.push(circle(18.0, 17.0, 3.0, center, Some(0.6)));
    doc
}

fn cherry(p: &Palette) -> SvgDoc {
    let primary = p.color(ColorRole::Primary);
    let secondary = p.color(ColorRole::Secondary);
    let center = p.color(ColorRole::Center);

    let mut doc = SvgDoc::new(30.0, 30.0);
    for i in 0..5 {
        let angle = 72.0 * f64::from(i) - 90.0;
        let rad = angle.to_radians();
        // Notched petals via two overlapping circles.
        doc.push(circle(
            15.0 + rad.cos() * 8.0,
            15.0 + rad.sin() * 8.0,
            6.0,
            primary,
            Some(0.85),
        ));
        doc.push(circle(
            15.0 + rad.cos() * 10.0,
            15.0 + rad.sin() * 10.0,
            2.0,
            secondary,
            Some(0.3),
        ));
    }
    doc.push(circle(15.0, 15.0, 3.5, center, Some(0.6)));
    doc.push(circle(14.0, 14.0, 0.8, "#fff", Some(0.5)));
    doc.push(circle(16.0, 15.0, 0.6, "#fff", Some(0.4)));
    doc
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn shape_count(doc: &SvgDoc) -> usize {
        doc.nodes.len()
    }

    #[test]
    fn head_viewbox_matches_spec_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for kind in FlowerKind::ALL {
            let spec = kind.spec();
            let doc = head_svg(kind, &spec.variants[0], &mut rng);
            assert_eq!(doc.width, spec.head_width, "{}", kind.name());
            assert_eq!(doc.height, spec.head_height, "{}", kind.name());
            assert!(shape_count(&doc) > 0);
        }
    }

    #[test]
    fn daisy_has_twelve_evenly_spaced_petals() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let spec = FlowerKind::Daisy.spec();
        let doc = head_svg(FlowerKind::Daisy, &spec.variants[0], &mut rng);
        let angles: Vec<f64> = doc
            .nodes
            .iter()
            .filter_map(|n| match n {
                SvgNode::Ellipse {
                    rotate: Some(r), ..
                } => Some(r.degrees),
                _ => None,
            })
            .collect();
        assert_eq!(angles.len(), 12);
        for (i, a) in angles.iter().enumerate() {
            assert!((a - 30.0 * i as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn cherry_petals_sit_on_a_radius_eight_ring() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let spec = FlowerKind::Cherry.spec();
        let doc = head_svg(FlowerKind::Cherry, &spec.variants[0], &mut rng);
        let petals: Vec<(f64, f64)> = doc
            .nodes
            .iter()
            .filter_map(|n| match n {
                SvgNode::Circle { cx, cy, r, .. } if (*r - 6.0).abs() < 1e-9 => Some((*cx, *cy)),
                _ => None,
            })
            .collect();
        assert_eq!(petals.len(), 5);
        for (cx, cy) in petals {
            let dist = ((cx - 15.0).powi(2) + (cy - 15.0).powi(2)).sqrt();
            assert!((dist - 8.0).abs() < 1e-9);
        }
    }

    #[test]
    fn lavender_floret_opacity_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let spec = FlowerKind::Lavender.spec();
        for _ in 0..50 {
            let doc = head_svg(FlowerKind::Lavender, &spec.variants[1], &mut rng);
            for node in &doc.nodes {
                if let SvgNode::Ellipse {
                    opacity: Some(o), ..
                } = node
                {
                    assert!((0.6..=1.0).contains(o));
                }
            }
        }
    }

    #[test]
    fn heads_are_deterministic_except_lavender() {
        let mut a = ChaCha8Rng::seed_from_u64(5);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        let spec = FlowerKind::Rose.spec();
        let first = head_svg(FlowerKind::Rose, &spec.variants[0], &mut a);
        let second = head_svg(FlowerKind::Rose, &spec.variants[0], &mut b);
        assert_eq!(first, second);
    }
}
