//! One layout pass: place, stamp, connect.

use super::connector::draw_connectors;
use super::grid::Grid;
use super::placer::{place_nodes, LayoutOptions, Placement};
use super::theme::GlyphTheme;
use shared::dto::network::GraphNode;
use tracing::debug;

/// Output of a layout pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyLayout {
    pub grid: Grid,
    /// Nodes that landed on the grid, in render order
    pub placements: Vec<Placement>,
    /// Arrow cells written by the connector pass
    pub connector_cells: usize,
}

impl TopologyLayout {
    pub fn rows(&self) -> Vec<String> {
        self.grid.rows()
    }

    /// Nodes left out because their slot fell outside the grid
    pub fn omitted(&self, total_nodes: usize) -> usize {
        total_nodes.saturating_sub(self.placements.len())
    }
}

/// Render `nodes` onto a fresh `width × height` grid.
///
/// Blocks are stamped in placement order, so a later node overwrites the
/// cells of an earlier one where their blocks overlap. Connectors are drawn
/// afterwards and only into free cells. Nothing here fails: whatever cannot be
/// drawn is skipped.
pub fn render_topology(
    nodes: &[GraphNode],
    width: usize,
    height: usize,
    options: &LayoutOptions,
    theme: &GlyphTheme,
) -> TopologyLayout {
    let mut grid = Grid::new(width, height, theme.background);
    let placements = place_nodes(nodes, width, height, options);

    for placement in &placements {
        if let Some(node) = nodes.get(placement.index) {
            grid.stamp(placement.x, placement.y, theme.block(node.status));
        }
    }

    let connector_cells = draw_connectors(&mut grid, nodes, &placements, theme);

    debug!(
        nodes = nodes.len(),
        placed = placements.len(),
        connector_cells,
        width,
        height,
        "Topology layout rendered"
    );

    TopologyLayout {
        grid,
        placements,
        connector_cells,
    }
}
