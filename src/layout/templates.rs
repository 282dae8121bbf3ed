use serde_json::{Value, json};

/// A ready-made level offered to authors as a starting point.
#[derive(Debug, Clone, Copy)]
pub struct LevelTemplate {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub grid: &'static [&'static str],
}

impl LevelTemplate {
    pub fn width(&self) -> usize {
        self.grid.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.grid.len()
    }

    /// The layout in wire form, ready for validation or for the engine.
    pub fn layout_value(&self) -> Value {
        json!({
            "width": self.width(),
            "height": self.height(),
            "grid": self.grid,
        })
    }
}

pub const TEMPLATES: &[LevelTemplate] = &[
    LevelTemplate {
        key: "beginner",
        name: "Beginner's Challenge",
        description: "A simple map for new players to learn the basics",
        grid: &[
            "WWWWWWWW",
            "W......W",
            "W..T.B.W",
            "W..P.B.W",
            "W..T.B.W",
            "W......W",
            "W......W",
            "WWWWWWWW",
        ],
    },
    LevelTemplate {
        key: "intermediate",
        name: "Box Maze",
        description: "A medium difficulty map with boxes arranged in a maze-like pattern",
        grid: &[
            "WWWWWWWWWW",
            "W........W",
            "W.B..B...W",
            "W..T.T...W",
            "W.B..B...W",
            "W..T.T...W",
            "W........W",
            "W...P....W",
            "W........W",
            "WWWWWWWWWW",
        ],
    },
    LevelTemplate {
        key: "advanced",
        name: "Box Surplus",
        description: "A challenging map with more boxes than targets, requiring strategic box placement",
        grid: &[
            "WWWWWWWWWWWW",
            "W..........W",
            "W.B......B.W",
            "W.B......B.W",
            "W..T....T..W",
            "W..........W",
            "W..........W",
            "W.B......B.W",
            "W..........W",
            "W..........W",
            "W....P.....W",
            "WWWWWWWWWWWW",
        ],
    },
    LevelTemplate {
        key: "expert",
        name: "Box Overload",
        description: "An expert-level map with significantly more boxes than targets",
        grid: &[
            "WWWWWWWWWWWWWW",
            "W............W",
            "W.B........B.W",
            "W..B......B..W",
            "W...T....T...W",
            "W....B..B....W",
            "W.....BB.....W",
            "W.....BB.....W",
            "W....B..B....W",
            "W...T....T...W",
            "W..B......B..W",
            "W.B........B.W",
            "W.....P......W",
            "WWWWWWWWWWWWWW",
        ],
    },
];

pub fn template(key: &str) -> Option<&'static LevelTemplate> {
    TEMPLATES.iter().find(|t| t.key.eq_ignore_ascii_case(key))
}
