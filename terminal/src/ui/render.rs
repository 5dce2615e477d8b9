//! # Text Panels
//!
//! Plain-text rendering of the network map, node table and order list.
//! Everything returns a `String`; the caller decides where it is printed.

use chrono::{DateTime, Utc};
use lib_core::topology::{render_topology, GlyphTheme, LayoutOptions, NetworkStats};
use lib_utils::format_clock;
use shared::dto::network::GraphNode;
use shared::dto::order::{OrderStatus, SmartOrder};
use shared::utils::{activity_bar, fit_width, format_latency};
use std::fmt::Write;

/// Map dimensions and layout for one panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapFrame {
    pub width: usize,
    pub height: usize,
    pub options: LayoutOptions,
}

/// Header, stats line, framed grid and an omission note.
pub fn render_map(nodes: &[GraphNode], frame: &MapFrame, theme: &GlyphTheme, at: DateTime<Utc>) -> String {
    let layout = render_topology(nodes, frame.width, frame.height, &frame.options, theme);
    let stats = NetworkStats::from_nodes(nodes);
    let rule = "─".repeat(frame.width);

    let mut out = String::new();
    let _ = writeln!(out, "NETWORK MAP  {}", format_clock(at));
    let _ = writeln!(out, "{}", stats.summary_line());
    let _ = writeln!(out, "┌{}┐", rule);
    for row in layout.rows() {
        let _ = writeln!(out, "│{}│", row);
    }
    let _ = write!(out, "└{}┘", rule);

    let omitted = layout.omitted(nodes.len());
    if omitted > 0 {
        let _ = write!(out, "\n({} nodes outside the map)", omitted);
    }
    out
}

const ID_WIDTH: usize = 10;
const STATUS_WIDTH: usize = 11;
const LATENCY_WIDTH: usize = 9;
const BAR_WIDTH: usize = 8;

/// One row per node: id, status, latency, load bar, region
pub fn render_node_table(nodes: &[GraphNode]) -> String {
    let mut lines = vec![format!(
        "{}{}{}{}  REGION",
        fit_width("ID", ID_WIDTH),
        fit_width("STATUS", STATUS_WIDTH),
        fit_width("LATENCY", LATENCY_WIDTH),
        fit_width("LOAD", BAR_WIDTH + 2),
    )];

    for node in nodes {
        lines.push(format!(
            "{}{}{}{}  {}",
            fit_width(&node.id, ID_WIDTH),
            fit_width(node.status.as_str(), STATUS_WIDTH),
            fit_width(&format_latency(node.latency), LATENCY_WIDTH),
            activity_bar(node.activity, BAR_WIDTH),
            node.region
        ));
    }
    lines.join("\n")
}

/// Order list, newest last. Failed orders get their reason on a second line.
pub fn render_orders(orders: &[SmartOrder]) -> String {
    if orders.is_empty() {
        return "No orders yet. Try: BUY 1.5 SOL".to_string();
    }

    let mut lines = vec![format!(
        "{}{}ORDER",
        fit_width("ID", ID_WIDTH),
        fit_width("STATUS", STATUS_WIDTH)
    )];
    for order in orders {
        lines.push(format!(
            "{}{}{}",
            fit_width(&order.short_id(), ID_WIDTH),
            fit_width(order.status.as_str(), STATUS_WIDTH),
            order.intent.describe()
        ));
        if let Some(reason) = &order.failure_reason {
            lines.push(format!("{}↳ {}", " ".repeat(ID_WIDTH + STATUS_WIDTH), reason));
        }
    }
    lines.join("\n")
}

/// Console line for a status change
pub fn render_order_event(order: &SmartOrder) -> String {
    let mut line = format!(
        "[{}] {} {}{}",
        format_clock(order.updated_at),
        order.short_id(),
        fit_width(order.status.as_str(), STATUS_WIDTH),
        order.intent.describe()
    );
    if order.status == OrderStatus::Failed {
        if let Some(reason) = &order.failure_reason {
            let _ = write!(line, " ({})", reason);
        }
    }
    line
}
