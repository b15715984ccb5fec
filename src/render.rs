//! Scene composition: assembles spawned flowers and particles into one
//! [`SvgDoc`] on a canvas.
//!
//! Each flower becomes a positioning wrapper group (translation + scale,
//! anchored to the bottom edge) around an inner group that carries the sway
//! class and timing variables, with the head graphic, stem and leaves as
//! children. Particles carry their trajectory variables the same way, so a
//! hosting page with the matching keyframes can animate the output as-is.

use crate::{
    particles::{Petal, Sparkle},
    scene::Scene,
    spawn::{Flower, LeafSide},
    svg::{Affine, Canvas, Group, Rotation, SvgDoc, SvgNode},
};

const STEM_COLOR: &str = "#2d6a4f";
const LEAF_COLOR: &str = "#40916c";
const PETAL_COLOR: &str = "#ffc0cb";
const SPARKLE_COLOR: &str = "#fff3fa";

const STEM_WIDTH: f64 = 2.0;
const LEAF_RX: f64 = 5.0;
const LEAF_RY: f64 = 2.0;

fn secs(v: f64) -> String {
    format!("{v:.2}s")
}

fn px(v: f64) -> String {
    format!("{v:.1}px")
}

#[tracing::instrument(skip(scene))]
pub fn render_scene(scene: &Scene, canvas: Canvas) -> SvgDoc {
    let width = f64::from(canvas.width);
    let height = f64::from(canvas.height);
    let mut doc = SvgDoc::new(width, height);

    if let Some(bed) = &scene.flower_bed {
        let mut group = Group::with_class("flower-bed");
        for flower in &bed.flowers {
            group.nodes.push(SvgNode::Group(flower_group(flower, canvas)));
        }
        doc.push(SvgNode::Group(group));
    }

    if let Some(layer) = &scene.petal_layer {
        let mut group = Group::with_class("petal-container");
        for petal in &layer.petals {
            group.nodes.push(SvgNode::Group(petal_group(petal, canvas)));
        }
        doc.push(SvgNode::Group(group));
    }

    if let Some(layer) = &scene.sparkle_layer {
        let mut group = Group::with_class("heart-sparkles");
        for sparkle in &layer.sparkles {
            group.nodes.push(SvgNode::Group(sparkle_group(sparkle, canvas)));
        }
        doc.push(SvgNode::Group(group));
    }

    doc
}

pub fn scene_to_svg(scene: &Scene, canvas: Canvas) -> String {
    render_scene(scene, canvas).to_svg_string()
}

/// Positioning wrapper + inner animated group for one flower. The wrapper
/// carries position and scale so the sway transform on the inner group does
/// not fight with them, mirroring the two-element structure of the engine's
/// DOM output.
pub fn flower_group(flower: &Flower, canvas: Canvas) -> Group {
    let x = flower.x_percent / 100.0 * f64::from(canvas.width);
    let anchor = Affine::translate((x, f64::from(canvas.height))) * Affine::scale(flower.scale);

    let spec = flower.kind.spec();
    let head = Group {
        class: Some(format!("flower-head flower-head-{}", flower.kind.name())),
        transform: Some(Affine::translate((
            -spec.head_width / 2.0,
            -(flower.stem_height + spec.head_height),
        ))),
        style_vars: Vec::new(),
        nodes: flower.head.nodes.clone(),
    };

    let stem = SvgNode::Rect {
        x: -STEM_WIDTH / 2.0,
        y: -flower.stem_height,
        width: STEM_WIDTH,
        height: flower.stem_height,
        rx: Some(STEM_WIDTH / 2.0),
        fill: STEM_COLOR.to_string(),
        opacity: None,
    };

    let mut inner = Group {
        class: Some(format!("flower {}", flower.sway.class_name())),
        transform: None,
        style_vars: vec![
            ("--sway-duration".to_string(), secs(flower.sway_duration)),
            ("--sway-delay".to_string(), secs(flower.sway_delay)),
            ("animation-delay".to_string(), secs(flower.grow_delay)),
        ],
        nodes: vec![SvgNode::Group(head), stem],
    };

    for leaf in &flower.leaves {
        // Leaf offset is measured down from the stem top.
        let cy = -flower.stem_height + flower.stem_height * leaf.top_percent / 100.0;
        let (cx, tilt) = match leaf.side {
            LeafSide::Left => (-LEAF_RX, -30.0),
            LeafSide::Right => (LEAF_RX, 30.0),
        };
        inner.nodes.push(SvgNode::Ellipse {
            cx,
            cy,
            rx: LEAF_RX,
            ry: LEAF_RY,
            fill: LEAF_COLOR.to_string(),
            opacity: None,
            stroke: None,
            rotate: Some(Rotation {
                degrees: tilt,
                cx,
                cy,
            }),
        });
    }

    Group {
        class: Some("flower-wrapper".to_string()),
        transform: Some(anchor),
        style_vars: Vec::new(),
        nodes: vec![SvgNode::Group(inner)],
    }
}

fn petal_group(petal: &Petal, canvas: Canvas) -> Group {
    let x = petal.x_percent / 100.0 * f64::from(canvas.width);
    Group {
        class: Some("petal".to_string()),
        transform: Some(Affine::translate((x, 0.0))),
        style_vars: vec![
            ("--fall-duration".to_string(), secs(petal.fall_duration)),
            ("--fall-delay".to_string(), secs(petal.fall_delay)),
            ("--drift".to_string(), px(petal.drift)),
        ],
        nodes: vec![SvgNode::Ellipse {
            cx: 0.0,
            cy: 0.0,
            rx: petal.width / 2.0,
            ry: petal.height / 2.0,
            fill: PETAL_COLOR.to_string(),
            opacity: Some(0.8),
            stroke: None,
            rotate: None,
        }],
    }
}

fn sparkle_group(sparkle: &Sparkle, canvas: Canvas) -> Group {
    let center_x = f64::from(canvas.width) / 2.0;
    let center_y = f64::from(canvas.height) / 2.0;
    Group {
        class: Some("sparkle".to_string()),
        transform: None,
        style_vars: vec![
            ("--sx".to_string(), px(sparkle.start.x)),
            ("--sy".to_string(), px(sparkle.start.y)),
            ("--ex".to_string(), px(sparkle.end.x)),
            ("--ey".to_string(), px(sparkle.end.y)),
            ("--sparkle-duration".to_string(), secs(sparkle.duration)),
            ("--sparkle-delay".to_string(), secs(sparkle.delay)),
        ],
        nodes: vec![SvgNode::Circle {
            cx: center_x + sparkle.start.x,
            cy: center_y + sparkle.start.y,
            r: sparkle.size / 2.0,
            fill: SPARKLE_COLOR.to_string(),
            opacity: Some(0.9),
        }],
    }
}
