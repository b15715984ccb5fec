//! Structured vector-graphic description.
//!
//! The generation code in this crate never touches a DOM or a rasterizer; it
//! produces an [`SvgDoc`] tree of plain data nodes. [`SvgDoc::to_svg_string`]
//! is the thin adapter that turns the tree into SVG markup.

use std::fmt::Write as _;

use crate::error::{FloretError, FloretResult};

pub use kurbo::{Affine, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> FloretResult<Self> {
        if width == 0 || height == 0 {
            return Err(FloretError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }
}

/// `rotate(degrees cx cy)` applied to a single shape.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rotation {
    pub degrees: f64,
    pub cx: f64,
    pub cy: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum SvgNode {
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        fill: String,
        opacity: Option<f64>,
        stroke: Option<Stroke>,
        rotate: Option<Rotation>,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
        opacity: Option<f64>,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: Option<f64>,
        fill: String,
        opacity: Option<f64>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Stroke,
        opacity: Option<f64>,
    },
    Path {
        d: String,
        fill: String,
        opacity: Option<f64>,
    },
    Group(Group),
}

/// A `<g>` element. `style_vars` become CSS custom properties on the group so
/// a hosting page can drive keyframe animations off them.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Group {
    pub class: Option<String>,
    pub transform: Option<Affine>,
    pub style_vars: Vec<(String, String)>,
    pub nodes: Vec<SvgNode>,
}

impl Group {
    pub fn with_class(class: impl Into<String>) -> Self {
        Self {
            class: Some(class.into()),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SvgDoc {
    /// View box is `0 0 width height`.
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<SvgNode>,
}

impl SvgDoc {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: SvgNode) {
        self.nodes.push(node);
    }

    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg viewBox=\"0 0 {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
            self.width, self.height
        );
        for node in &self.nodes {
            write_node(&mut out, node);
        }
        out.push_str("</svg>");
        out
    }
}

fn write_opacity(out: &mut String, opacity: Option<f64>) {
    if let Some(o) = opacity {
        let _ = write!(out, " opacity=\"{o}\"");
    }
}

fn write_node(out: &mut String, node: &SvgNode) {
    match node {
        SvgNode::Ellipse {
            cx,
            cy,
            rx,
            ry,
            fill,
            opacity,
            stroke,
            rotate,
        } => {
            let _ = write!(
                out,
                "<ellipse cx=\"{cx}\" cy=\"{cy}\" rx=\"{rx}\" ry=\"{ry}\" fill=\"{fill}\""
            );
            if let Some(s) = stroke {
                let _ = write!(out, " stroke=\"{}\" stroke-width=\"{}\"", s.color, s.width);
            }
            write_opacity(out, *opacity);
            if let Some(r) = rotate {
                let _ = write!(
                    out,
                    " transform=\"rotate({} {} {})\"",
                    r.degrees, r.cx, r.cy
                );
            }
            out.push_str("/>");
        }
        SvgNode::Circle {
            cx,
            cy,
            r,
            fill,
            opacity,
        } => {
            let _ = write!(out, "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\" fill=\"{fill}\"");
            write_opacity(out, *opacity);
            out.push_str("/>");
        }
        SvgNode::Rect {
            x,
            y,
            width,
            height,
            rx,
            fill,
            opacity,
        } => {
            let _ = write!(
                out,
                "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\""
            );
            if let Some(rx) = rx {
                let _ = write!(out, " rx=\"{rx}\"");
            }
            let _ = write!(out, " fill=\"{fill}\"");
            write_opacity(out, *opacity);
            out.push_str("/>");
        }
        SvgNode::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            opacity,
        } => {
            let _ = write!(
                out,
                "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"{}\" stroke-width=\"{}\"",
                stroke.color, stroke.width
            );
            write_opacity(out, *opacity);
            out.push_str("/>");
        }
        SvgNode::Path { d, fill, opacity } => {
            let _ = write!(out, "<path d=\"{d}\" fill=\"{fill}\"");
            write_opacity(out, *opacity);
            out.push_str("/>");
        }
        SvgNode::Group(group) => {
            out.push_str("<g");
            if let Some(class) = &group.class {
                let _ = write!(out, " class=\"{class}\"");
            }
            if let Some(t) = &group.transform {
                let [a, b, c, d, e, f] = t.as_coeffs();
                let _ = write!(out, " transform=\"matrix({a} {b} {c} {d} {e} {f})\"");
            }
            if !group.style_vars.is_empty() {
                out.push_str(" style=\"");
                for (name, value) in &group.style_vars {
                    let _ = write!(out, "{name}:{value};");
                }
                out.push('"');
            }
            out.push('>');
            for child in &group.nodes {
                write_node(out, child);
            }
            out.push_str("</g>");
        }
    }
}
