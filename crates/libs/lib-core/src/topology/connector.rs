//! Connector drawing between placed nodes.
//!
//! A connector walks from the source anchor to the target anchor one cell at a
//! time, moving on both axes while both are off target. Each intermediate cell
//! that holds the background glyph receives the arrow for the step that
//! entered it.

use super::grid::Grid;
use super::placer::Placement;
use super::theme::GlyphTheme;
use shared::dto::network::GraphNode;
use std::collections::HashMap;

/// Compass direction of a connector step. North is up the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// Counter-clockwise from east, 45° apart
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Quantize an angle (degrees, counter-clockwise from east) into one of
    /// eight 45° sectors centred on the compass directions.
    ///
    /// Boundaries at `22.5° + k·45°` round half-up: the angle belongs to the
    /// next sector counter-clockwise. Non-finite angles map to east.
    pub fn from_degrees(degrees: f64) -> Direction {
        if !degrees.is_finite() {
            return Direction::East;
        }
        let normalized = degrees.rem_euclid(360.0);
        let sector = ((normalized + 22.5) / 45.0).floor() as usize % 8;
        Self::ALL[sector]
    }

    /// Direction of a grid step `(dx, dy)` with screen `y` growing downward.
    /// `None` for the zero step.
    pub fn from_step(dx: isize, dy: isize) -> Option<Direction> {
        if dx == 0 && dy == 0 {
            return None;
        }
        let degrees = (-(dy as f64)).atan2(dx as f64).to_degrees();
        Some(Self::from_degrees(degrees))
    }
}

/// One intermediate cell of a connector path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub x: isize,
    pub y: isize,
    pub direction: Direction,
}

/// Intermediate cells between `from` and `to`, excluding both endpoints.
///
/// Each step advances every axis that is still off target, so paths run
/// diagonally until one axis lines up and straight afterwards.
pub fn trace_path(from: (usize, usize), to: (usize, usize)) -> Vec<PathStep> {
    let (tx, ty) = (to.0 as isize, to.1 as isize);
    let (mut x, mut y) = (from.0 as isize, from.1 as isize);
    let mut steps = Vec::new();

    while (x, y) != (tx, ty) {
        let dx = (tx - x).signum();
        let dy = (ty - y).signum();
        x += dx;
        y += dy;
        if (x, y) == (tx, ty) {
            break;
        }
        if let Some(direction) = Direction::from_step(dx, dy) {
            steps.push(PathStep { x, y, direction });
        }
    }
    steps
}

/// Draw every resolvable connection onto `grid`.
///
/// Connection ids resolve against placed nodes only; with duplicate ids the
/// first placed node wins. Self loops and unresolved ids are skipped. A path
/// stops at the first step outside the grid. Returns the number of arrow
/// cells written.
pub fn draw_connectors(
    grid: &mut Grid,
    nodes: &[GraphNode],
    placements: &[Placement],
    theme: &GlyphTheme,
) -> usize {
    let mut anchors: HashMap<&str, (usize, usize)> = HashMap::with_capacity(placements.len());
    for placement in placements {
        if let Some(node) = nodes.get(placement.index) {
            anchors
                .entry(node.id.as_str())
                .or_insert((placement.x, placement.y));
        }
    }

    let mut written = 0;
    for placement in placements {
        let Some(source) = nodes.get(placement.index) else {
            continue;
        };
        let from = (placement.x, placement.y);

        for target_id in &source.connections {
            if *target_id == source.id {
                tracing::trace!(node = %source.id, "Self loop skipped");
                continue;
            }
            let Some(&to) = anchors.get(target_id.as_str()) else {
                tracing::trace!(node = %source.id, target = %target_id, "Unresolved connection skipped");
                continue;
            };
            written += draw_path(grid, from, to, theme);
        }
    }
    written
}

fn draw_path(grid: &mut Grid, from: (usize, usize), to: (usize, usize), theme: &GlyphTheme) -> usize {
    let mut written = 0;
    for step in trace_path(from, to) {
        if !grid.contains(step.x, step.y) {
            break;
        }
        let (x, y) = (step.x as usize, step.y as usize);
        if grid.get(x, y) == Some(grid.background()) {
            grid.set(x, y, theme.arrow(step.direction));
            written += 1;
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::network::NodeStatus;

    #[test]
    fn test_sector_centres() {
        for (i, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(Direction::from_degrees(i as f64 * 45.0), *direction);
        }
        assert_eq!(Direction::from_degrees(-90.0), Direction::South);
        assert_eq!(Direction::from_degrees(720.0), Direction::East);
        assert_eq!(Direction::from_degrees(360.0), Direction::East);
        assert_eq!(Direction::from_degrees(-0.0), Direction::East);
        assert_eq!(Direction::from_degrees(-45.0), Direction::SouthEast);
    }

    #[test]
    fn test_sector_boundaries_round_half_up() {
        assert_eq!(Direction::from_degrees(22.5), Direction::NorthEast);
        assert_eq!(Direction::from_degrees(22.499), Direction::East);
        assert_eq!(Direction::from_degrees(67.5), Direction::North);
        assert_eq!(Direction::from_degrees(157.5), Direction::West);
        assert_eq!(Direction::from_degrees(337.5), Direction::East);
        assert_eq!(Direction::from_degrees(337.499), Direction::SouthEast);
        assert_eq!(Direction::from_degrees(-22.5), Direction::East);
    }

    #[test]
    fn test_non_finite_angle() {
        assert_eq!(Direction::from_degrees(f64::NAN), Direction::East);
        assert_eq!(Direction::from_degrees(f64::INFINITY), Direction::East);
    }

    #[test]
    fn test_step_directions_use_screen_coordinates() {
        assert_eq!(Direction::from_step(1, 0), Some(Direction::East));
        assert_eq!(Direction::from_step(0, -1), Some(Direction::North));
        assert_eq!(Direction::from_step(0, 1), Some(Direction::South));
        assert_eq!(Direction::from_step(1, 1), Some(Direction::SouthEast));
        assert_eq!(Direction::from_step(-1, -1), Some(Direction::NorthWest));
        assert_eq!(Direction::from_step(-1, 1), Some(Direction::SouthWest));
        assert_eq!(Direction::from_step(0, 0), None);
    }

    #[test]
    fn test_trace_path_diagonal_then_straight() {
        let path = trace_path((0, 0), (4, 2));
        let cells: Vec<_> = path.iter().map(|s| (s.x, s.y, s.direction)).collect();
        assert_eq!(
            cells,
            vec![
                (1, 1, Direction::SouthEast),
                (2, 2, Direction::SouthEast),
                (3, 2, Direction::East),
            ]
        );
    }

    #[test]
    fn test_trace_path_adjacent_and_identical() {
        assert!(trace_path((3, 3), (4, 3)).is_empty());
        assert!(trace_path((3, 3), (3, 3)).is_empty());
    }

    fn placed(nodes: &[GraphNode], coords: &[(usize, usize)]) -> Vec<Placement> {
        coords
            .iter()
            .enumerate()
            .take(nodes.len())
            .map(|(index, &(x, y))| Placement { index, x, y })
            .collect()
    }

    #[test]
    fn test_connector_writes_only_free_cells() {
        let nodes = vec![
            GraphNode::new("a", NodeStatus::Active).with_connections(["b"]),
            GraphNode::new("b", NodeStatus::Active),
        ];
        let placements = placed(&nodes, &[(0, 0), (5, 0)]);
        let mut grid = Grid::blank(6, 1);
        grid.set(2, 0, '#');

        let written = draw_connectors(&mut grid, &nodes, &placements, &GlyphTheme::default());
        assert_eq!(written, 3);
        assert_eq!(grid.to_string(), " →#→→ ");
    }

    #[test]
    fn test_connector_crosses_block_padding() {
        let nodes = vec![
            GraphNode::new("a", NodeStatus::Active).with_connections(["b"]),
            GraphNode::new("b", NodeStatus::Active),
        ];
        let theme = GlyphTheme::default();
        let placements = placed(&nodes, &[(0, 0), (4, 2)]);
        let mut grid = Grid::new(9, 5, theme.background);
        grid.stamp(0, 0, theme.block(NodeStatus::Active));
        assert_eq!(grid.get(1, 1), Some(theme.background));

        let written = draw_connectors(&mut grid, &nodes, &placements, &theme);
        // (1,1) is padding inside the block, (2,2) and (3,2) are border cells
        assert_eq!(written, 1);
        assert_eq!(grid.get(1, 1), Some(theme.arrow(Direction::SouthEast)));
        assert_eq!(grid.rows()[1], "│↘✓ │    ");
        assert_eq!(grid.rows()[2], "└───┘    ");
    }

    #[test]
    fn test_path_stops_at_grid_edge() {
        let nodes = vec![
            GraphNode::new("a", NodeStatus::Active).with_connections(["b"]),
            GraphNode::new("b", NodeStatus::Active),
        ];
        let placements = placed(&nodes, &[(0, 0), (10, 0)]);
        let mut grid = Grid::blank(4, 1);

        let written = draw_connectors(&mut grid, &nodes, &placements, &GlyphTheme::default());
        assert_eq!(written, 3);
        assert_eq!(grid.to_string(), " →→→");
    }

    #[test]
    fn test_self_loop_and_unknown_target_draw_nothing() {
        let nodes = vec![
            GraphNode::new("a", NodeStatus::Active).with_connections(["a", "ghost"]),
            GraphNode::new("b", NodeStatus::Active),
        ];
        let placements = placed(&nodes, &[(0, 0), (4, 4)]);
        let mut grid = Grid::blank(6, 6);

        let written = draw_connectors(&mut grid, &nodes, &placements, &GlyphTheme::default());
        assert_eq!(written, 0);
        assert!(grid.is_blank());
    }

    #[test]
    fn test_unplaced_target_is_unresolved() {
        let nodes = vec![
            GraphNode::new("a", NodeStatus::Active).with_connections(["b"]),
            GraphNode::new("b", NodeStatus::Active),
        ];
        // only "a" made it onto the grid
        let placements = placed(&nodes[..1], &[(0, 0)]);
        let mut grid = Grid::blank(4, 4);

        assert_eq!(draw_connectors(&mut grid, &nodes, &placements, &GlyphTheme::default()), 0);
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first_placed() {
        let nodes = vec![
            GraphNode::new("a", NodeStatus::Active).with_connections(["b"]),
            GraphNode::new("b", NodeStatus::Active),
            GraphNode::new("b", NodeStatus::Offline),
        ];
        let placements = placed(&nodes, &[(0, 0), (3, 0), (0, 3)]);
        let mut grid = Grid::blank(4, 4);

        draw_connectors(&mut grid, &nodes, &placements, &GlyphTheme::default());
        assert_eq!(grid.rows()[0], " →→ ");
        assert_eq!(grid.get(0, 1), Some(' '));
    }

    #[test]
    fn test_redrawing_does_not_change_existing_glyphs() {
        let nodes = vec![
            GraphNode::new("a", NodeStatus::Active).with_connections(["b"]),
            GraphNode::new("b", NodeStatus::Active).with_connections(["a"]),
        ];
        let placements = placed(&nodes, &[(0, 0), (4, 2)]);
        let mut grid = Grid::blank(5, 3);
        draw_connectors(&mut grid, &nodes, &placements, &GlyphTheme::default());
        let first = grid.clone();

        let written = draw_connectors(&mut grid, &nodes, &placements, &GlyphTheme::default());
        assert_eq!(written, 0);
        assert_eq!(grid, first);
    }
}
