//! Built-in preset patterns
//!
//! Offsets are `(dx, dy)`: `dx` along columns, `dy` along rows, anchored at
//! the top-left of each bounding box.

pub struct PresetDef {
    pub name: &'static str,
    /// Bounding `(width, height)`
    pub size: (usize, usize),
    pub cells: &'static [(usize, usize)],
}

/// Presets in registration order
pub const PRESETS: &[PresetDef] = &[
    // Still life
    PresetDef {
        name: "block",
        size: (2, 2),
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    // Oscillators
    PresetDef {
        name: "blinker",
        size: (3, 1),
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    PresetDef {
        name: "toad",
        size: (4, 2),
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    PresetDef {
        name: "beacon",
        size: (4, 4),
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    // Spaceships
    PresetDef {
        name: "glider",
        size: (3, 3),
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    PresetDef {
        name: "lwss",
        size: (5, 4),
        cells: &[
            (1, 0), (4, 0),
            (0, 1),
            (0, 2), (4, 2),
            (0, 3), (1, 3), (2, 3), (3, 3),
        ],
    },
    // Methuselahs
    PresetDef {
        name: "r-pentomino",
        size: (3, 3),
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    PresetDef {
        name: "diehard",
        size: (8, 3),
        cells: &[(6, 0), (0, 1), (1, 1), (1, 2), (5, 2), (6, 2), (7, 2)],
    },
    PresetDef {
        name: "acorn",
        size: (7, 3),
        cells: &[(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)],
    },
    // Period-3 oscillator
    PresetDef {
        name: "pulsar",
        size: (13, 13),
        cells: &[
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    // Emits a glider every 30 generations
    PresetDef {
        name: "gosper-glider-gun",
        size: (36, 9),
        cells: &[
            (24, 0),
            (22, 1), (24, 1),
            (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
            (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
            (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
            (10, 6), (16, 6), (24, 6),
            (11, 7), (15, 7),
            (12, 8), (13, 8),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_cells_inside_bounding_box() {
        for preset in PRESETS {
            let (w, h) = preset.size;
            for &(dx, dy) in preset.cells {
                assert!(dx < w && dy < h, "{} has ({}, {}) outside {}x{}", preset.name, dx, dy, w, h);
            }
        }
    }

    #[test]
    fn test_preset_populations() {
        let population = |name: &str| {
            PRESETS.iter().find(|p| p.name == name).map(|p| p.cells.len())
        };
        assert_eq!(population("glider"), Some(5));
        assert_eq!(population("lwss"), Some(9));
        assert_eq!(population("pulsar"), Some(48));
        assert_eq!(population("gosper-glider-gun"), Some(36));
    }

    #[test]
    fn test_preset_names_unique() {
        let mut names: Vec<_> = PRESETS.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PRESETS.len());
    }
}
