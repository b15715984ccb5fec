//! Flower type registry: eight built-in kinds, each with an intrinsic head
//! size and a handful of color-palette variants.

use std::collections::BTreeMap;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FlowerKind {
    Rose,
    Tulip,
    Daisy,
    Sunflower,
    Lily,
    Lavender,
    Poppy,
    Cherry,
}

impl FlowerKind {
    pub const ALL: [FlowerKind; 8] = [
        FlowerKind::Rose,
        FlowerKind::Tulip,
        FlowerKind::Daisy,
        FlowerKind::Sunflower,
        FlowerKind::Lily,
        FlowerKind::Lavender,
        FlowerKind::Poppy,
        FlowerKind::Cherry,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FlowerKind::Rose => "rose",
            FlowerKind::Tulip => "tulip",
            FlowerKind::Daisy => "daisy",
            FlowerKind::Sunflower => "sunflower",
            FlowerKind::Lily => "lily",
            FlowerKind::Lavender => "lavender",
            FlowerKind::Poppy => "poppy",
            FlowerKind::Cherry => "cherry",
        }
    }

    /// Lookup by name. Unknown names are not an error; callers that spawn by
    /// name skip the slot.
    pub fn from_name(name: &str) -> Option<FlowerKind> {
        FlowerKind::ALL.into_iter().find(|k| k.name() == name)
    }

    pub fn spec(self) -> FlowerSpec {
        spec_for(self)
    }
}

/// Named color slot inside a palette. Not every kind uses every role.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    Primary,
    Secondary,
    Center,
    Petal,
    Stamen,
}

/// One color-variant of a flower kind: a mapping of roles to hex colors.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette(BTreeMap<ColorRole, String>);

impl Palette {
    pub fn from_entries(entries: &[(ColorRole, &str)]) -> Self {
        Self(
            entries
                .iter()
                .map(|(role, color)| (*role, (*color).to_string()))
                .collect(),
        )
    }

    /// Resolve a role, falling back to black for roles the palette lacks.
    /// Built-in palettes always carry the roles their head renderer asks for.
    pub fn color(&self, role: ColorRole) -> &str {
        self.0.get(&role).map(String::as_str).unwrap_or("#000000")
    }
}

/// Static description of a flower kind: head viewport size plus the ordered
/// variant list the spawner picks from.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlowerSpec {
    pub kind: FlowerKind,
    pub head_width: f64,
    pub head_height: f64,
    pub variants: Vec<Palette>,
}

use ColorRole::{Center, Petal, Primary, Secondary, Stamen};

fn spec_for(kind: FlowerKind) -> FlowerSpec {
    let (head_width, head_height, variants) = match kind {
        FlowerKind::Rose => (
            32.0,
            30.0,
            vec![
                Palette::from_entries(&[
                    (Primary, "#e63946"),
                    (Secondary, "#c1121f"),
                    (Center, "#a4133c"),
                ]),
                Palette::from_entries(&[
                    (Primary, "#ff6b8a"),
                    (Secondary, "#e5547a"),
                    (Center, "#c9184a"),
                ]),
                Palette::from_entries(&[
                    (Primary, "#dc143c"),
                    (Secondary, "#b30000"),
                    (Center, "#8b0000"),
                ]),
            ],
        ),
        FlowerKind::Tulip => (
            26.0,
            30.0,
            vec![
                Palette::from_entries(&[(Primary, "#e63946"), (Secondary, "#ff4d6d")]),
                Palette::from_entries(&[(Primary, "#ff69b4"), (Secondary, "#ff85c8")]),
                Palette::from_entries(&[(Primary, "#ffd700"), (Secondary, "#ffe44d")]),
                Palette::from_entries(&[(Primary, "#9b59b6"), (Secondary, "#bb77d4")]),
            ],
        ),
        FlowerKind::Daisy => (
            34.0,
            34.0,
            vec![
                Palette::from_entries(&[(Petal, "#ffffff"), (Center, "#ffd700")]),
                Palette::from_entries(&[(Petal, "#fffde7"), (Center, "#ffb300")]),
            ],
        ),
        FlowerKind::Sunflower => (
            40.0,
            40.0,
            vec![
                Palette::from_entries(&[(Petal, "#ffc107"), (Center, "#5d4037")]),
                Palette::from_entries(&[(Petal, "#ff9800"), (Center, "#4e342e")]),
            ],
        ),
        FlowerKind::Lily => (
            36.0,
            32.0,
            vec![
                Palette::from_entries(&[
                    (Primary, "#ffffff"),
                    (Secondary, "#f8e8ee"),
                    (Stamen, "#ff9800"),
                ]),
                Palette::from_entries(&[
                    (Primary, "#fce4ec"),
                    (Secondary, "#f8bbd0"),
                    (Stamen, "#ffb74d"),
                ]),
            ],
        ),
        FlowerKind::Lavender => (
            14.0,
            40.0,
            vec![
                Palette::from_entries(&[(Primary, "#9b59b6"), (Secondary, "#8e44ad")]),
                Palette::from_entries(&[(Primary, "#7e57c2"), (Secondary, "#673ab7")]),
            ],
        ),
        FlowerKind::Poppy => (
            36.0,
            34.0,
            vec![
                Palette::from_entries(&[
                    (Primary, "#e63946"),
                    (Secondary, "#ff4d4d"),
                    (Center, "#1a1a1a"),
                ]),
                Palette::from_entries(&[
                    (Primary, "#ff6600"),
                    (Secondary, "#ff8533"),
                    (Center, "#2d2d2d"),
                ]),
            ],
        ),
        FlowerKind::Cherry => (
            30.0,
            30.0,
            vec![
                Palette::from_entries(&[
                    (Primary, "#ffc0cb"),
                    (Secondary, "#ffb6c1"),
                    (Center, "#ff69b4"),
                ]),
                Palette::from_entries(&[
                    (Primary, "#ffffff"),
                    (Secondary, "#ffe4e9"),
                    (Center, "#ffb6c1"),
                ]),
            ],
        ),
    };

    FlowerSpec {
        kind,
        head_width,
        head_height,
        variants,
    }
}
