//! Deterministic node placement.
//!
//! A node's slot depends only on its index in the input and the grid width,
//! never on its id or content. Slots fill left to right and wrap every
//! `width / spacing_x` nodes:
//!
//! ```text
//! x = (i mod slots) * spacing_x + margin
//! y = (i div slots) * spacing_y + margin
//! ```
//!
//! Nodes whose slot falls outside the grid are left out of the layout.

use shared::dto::network::GraphNode;

/// Slot geometry. The default is two cells between slots and a one-cell margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    pub spacing_x: usize,
    pub spacing_y: usize,
    pub margin: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            spacing_x: 2,
            spacing_y: 2,
            margin: 1,
        }
    }
}

impl LayoutOptions {
    /// Nodes per row for a grid `width` columns wide
    pub fn slots_per_row(&self, width: usize) -> usize {
        if self.spacing_x == 0 {
            return 0;
        }
        width / self.spacing_x
    }

    /// Anchor of the slot at `index`, or `None` when the width holds no slots.
    ///
    /// The result is not bounds-checked against the grid height.
    pub fn slot_for(&self, index: usize, width: usize) -> Option<(usize, usize)> {
        let slots = self.slots_per_row(width);
        if slots == 0 {
            return None;
        }
        let x = (index % slots)
            .checked_mul(self.spacing_x)?
            .checked_add(self.margin)?;
        let y = (index / slots)
            .checked_mul(self.spacing_y)?
            .checked_add(self.margin)?;
        Some((x, y))
    }
}

/// A node that made it onto the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Position of the node in the input slice
    pub index: usize,
    pub x: usize,
    pub y: usize,
}

/// Place nodes on a `width × height` grid, in input order.
///
/// Out-of-bounds nodes are dropped silently.
pub fn place_nodes(
    nodes: &[GraphNode],
    width: usize,
    height: usize,
    options: &LayoutOptions,
) -> Vec<Placement> {
    nodes
        .iter()
        .enumerate()
        .filter_map(|(index, node)| {
            match options.slot_for(index, width) {
                Some((x, y)) if x < width && y < height => Some(Placement { index, x, y }),
                _ => {
                    tracing::trace!(node = %node.id, index, width, height, "Node outside grid, omitted");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::network::NodeStatus;

    fn nodes(count: usize) -> Vec<GraphNode> {
        (0..count)
            .map(|i| GraphNode::new(format!("n{}", i), NodeStatus::Active))
            .collect()
    }

    #[test]
    fn test_slot_formula() {
        let options = LayoutOptions::default();
        // width 10 -> 5 slots per row
        assert_eq!(options.slot_for(0, 10), Some((1, 1)));
        assert_eq!(options.slot_for(4, 10), Some((9, 1)));
        assert_eq!(options.slot_for(5, 10), Some((1, 3)));
        assert_eq!(options.slot_for(7, 10), Some((5, 3)));
    }

    #[test]
    fn test_odd_width_floors_slots() {
        let options = LayoutOptions::default();
        assert_eq!(options.slots_per_row(9), 4);
        assert_eq!(options.slot_for(4, 9), Some((1, 3)));
    }

    #[test]
    fn test_narrow_grid_has_no_slots() {
        let options = LayoutOptions::default();
        assert_eq!(options.slot_for(0, 1), None);
        assert!(place_nodes(&nodes(3), 1, 10, &options).is_empty());
        assert!(place_nodes(&nodes(3), 0, 0, &options).is_empty());
    }

    #[test]
    fn test_placement_is_deterministic() {
        let options = LayoutOptions::default();
        let input = nodes(9);
        let first = place_nodes(&input, 8, 8, &options);
        let second = place_nodes(&input, 8, 8, &options);
        assert_eq!(first, second);
    }

    #[test]
    fn test_placement_ignores_node_content() {
        let options = LayoutOptions::default();
        let plain = nodes(4);
        let mut renamed = plain.clone();
        renamed[0].id = "zzz".to_string();
        renamed[1].status = NodeStatus::Offline;
        renamed[2].connections = vec!["n0".to_string()];

        assert_eq!(
            place_nodes(&plain, 6, 6, &options),
            place_nodes(&renamed, 6, 6, &options)
        );
    }

    #[test]
    fn test_rows_beyond_height_are_omitted() {
        let options = LayoutOptions::default();
        // width 4 -> 2 per row; rows at y = 1, 3, 5; height 4 keeps two rows
        let placed = place_nodes(&nodes(6), 4, 4, &options);
        assert_eq!(placed.len(), 4);
        assert!(placed.iter().all(|p| p.x < 4 && p.y < 4));
        assert_eq!(placed.last().map(|p| p.index), Some(3));
    }

    #[test]
    fn test_anchors_never_collide() {
        let options = LayoutOptions::default();
        let placed = place_nodes(&nodes(40), 11, 40, &options);
        let mut anchors: Vec<_> = placed.iter().map(|p| (p.x, p.y)).collect();
        anchors.sort();
        anchors.dedup();
        assert_eq!(anchors.len(), placed.len());
    }
}
