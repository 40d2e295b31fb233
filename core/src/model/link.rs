use std::fmt;

use topograph_common::config::{LabelAlignment, Theme};

use super::node::{Node, NodeId};

/// Index of a [`Link`] inside its [`crate::topology::Topology`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkId(pub usize);

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Direction of a link, derived from the level difference of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards a deeper level (`level_diff > 0`).
    Downstream,
    /// Towards a higher level (`level_diff < 0`).
    Upstream,
    /// Both endpoints share a level.
    Lateral,
}

impl Direction {
    pub fn from_level_diff(level_diff: i64) -> Self {
        match level_diff {
            d if d > 0 => Direction::Downstream,
            d if d < 0 => Direction::Upstream,
            _ => Direction::Lateral,
        }
    }

    /// The same link seen from its other end.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Downstream => Direction::Upstream,
            Direction::Upstream => Direction::Downstream,
            Direction::Lateral => Direction::Lateral,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Downstream => "downstream",
            Direction::Upstream => "upstream",
            Direction::Lateral => "lateral",
        };
        f.write_str(name)
    }
}

/// Optional link attributes. Anything left out keeps its default.
#[derive(Debug, Clone, Default)]
pub struct LinkAttrs {
    pub source_intf: String,
    pub target_intf: String,
    pub styles: LinkStyles,
    pub anchors: AnchorPoints,
}

/// Partial update of the style fragments of a link.
#[derive(Debug, Clone, Default)]
pub struct LinkStyles {
    pub base_style: Option<String>,
    pub link_style: Option<String>,
    pub src_label_style: Option<String>,
    pub trgt_label_style: Option<String>,
}

/// Partial update of where a link leaves its source and enters its target,
/// as fractions of the node size.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorPoints {
    pub entry_x: Option<f64>,
    pub entry_y: Option<f64>,
    pub exit_x: Option<f64>,
    pub exit_y: Option<f64>,
}

/// Top-left corners of the source and target interface labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPositions {
    pub source: (f64, f64),
    pub target: (f64, f64),
}

/// An edge between two nodes.
///
/// `direction` and `level_diff` are only written by the classification pass
/// and stay `None` until both endpoints have a level.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: LinkId,
    pub source: NodeId,
    pub target: NodeId,
    pub source_intf: String,
    pub target_intf: String,
    pub base_style: String,
    pub link_style: String,
    pub src_label_style: String,
    pub trgt_label_style: String,
    pub entry_x: f64,
    pub entry_y: f64,
    pub exit_x: f64,
    pub exit_y: f64,
    direction: Option<Direction>,
    level_diff: Option<i64>,
}

impl Link {
    pub fn new(source: NodeId, target: NodeId, attrs: LinkAttrs) -> Self {
        let mut link = Self {
            id: LinkId(usize::MAX),
            source,
            target,
            source_intf: attrs.source_intf,
            target_intf: attrs.target_intf,
            base_style: String::new(),
            link_style: String::new(),
            src_label_style: String::new(),
            trgt_label_style: String::new(),
            entry_x: 0.0,
            entry_y: 0.0,
            exit_x: 0.0,
            exit_y: 0.0,
            direction: None,
            level_diff: None,
        };
        link.set_styles(attrs.styles);
        link.set_entry_exit_points(attrs.anchors);
        link
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn level_diff(&self) -> Option<i64> {
        self.level_diff
    }

    pub fn is_classified(&self) -> bool {
        self.direction.is_some()
    }

    /// Recomputes `level_diff` and `direction` from the endpoint levels.
    ///
    /// A missing level resets the link to unclassified instead of keeping a
    /// stale value. So does a difference that does not fit in an `i64`.
    pub fn classify(&mut self, source_level: Option<i64>, target_level: Option<i64>) {
        match (source_level, target_level) {
            (Some(source), Some(target)) => {
                let level_diff = target.checked_sub(source);
                self.level_diff = level_diff;
                self.direction = level_diff.map(Direction::from_level_diff);
            }
            _ => {
                self.level_diff = None;
                self.direction = None;
            }
        }
    }

    /// Direction of the link as seen from `node`.
    ///
    /// The stored direction reads from source to target, so it is mirrored
    /// for the target endpoint. `None` if unclassified or `node` is not an endpoint.
    pub fn direction_from(&self, node: NodeId) -> Option<Direction> {
        let direction = self.direction?;
        if node == self.source {
            Some(direction)
        } else if node == self.target {
            Some(direction.reversed())
        } else {
            None
        }
    }

    /// The endpoint opposite to `node`. A self loop returns `node` itself.
    pub fn other_end(&self, node: NodeId) -> NodeId {
        if self.source == node {
            self.target
        } else {
            self.source
        }
    }

    pub fn has_endpoint(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }

    pub fn set_styles(&mut self, styles: LinkStyles) {
        if let Some(style) = styles.base_style {
            self.base_style = style;
        }
        if let Some(style) = styles.link_style {
            self.link_style = style;
        }
        if let Some(style) = styles.src_label_style {
            self.src_label_style = style;
        }
        if let Some(style) = styles.trgt_label_style {
            self.trgt_label_style = style;
        }
    }

    pub fn set_entry_exit_points(&mut self, anchors: AnchorPoints) {
        self.entry_x = anchors.entry_x.unwrap_or(self.entry_x);
        self.entry_y = anchors.entry_y.unwrap_or(self.entry_y);
        self.exit_x = anchors.exit_x.unwrap_or(self.exit_x);
        self.exit_y = anchors.exit_y.unwrap_or(self.exit_y);
    }

    pub fn generate_style_string(&self) -> String {
        format!(
            "{}{}entryY={};exitY={};entryX={};exitX={};",
            self.base_style, self.link_style, self.entry_y, self.exit_y, self.entry_x, self.exit_x
        )
    }

    /// Computes where the interface labels go.
    ///
    /// Labels sit `theme.label_offset` away from the exit/entry points along the
    /// link, then shift according to the label alignment. Returns `None` when
    /// either node has no position.
    pub fn get_label_positions(
        &self,
        source: &Node,
        target: &Node,
        theme: &Theme,
    ) -> Option<LabelPositions> {
        let (source_x, source_y) = (source.pos_x? as f64, source.pos_y? as f64);
        let (target_x, target_y) = (target.pos_x? as f64, target.pos_y? as f64);
        let node_width = theme.node_width as f64;
        let node_height = theme.node_height as f64;

        let source_exit_x = source_x + node_width * self.exit_x;
        let source_exit_y = source_y + node_height * self.exit_y;
        let target_entry_x = target_x + node_width * self.entry_x;
        let target_entry_y = target_y + node_height * self.entry_y;

        let dx = target_entry_x - source_exit_x;
        let dy = target_entry_y - source_exit_y;
        let length = dx.hypot(dy);
        let (unit_dx, unit_dy) = if length != 0.0 {
            (dx / length, dy / length)
        } else {
            (0.0, 0.0)
        };

        let offset = theme.label_offset;
        let mut source_label_x = source_exit_x + unit_dx * offset;
        let mut source_label_y = source_exit_y + unit_dy * offset;
        let mut target_label_x = target_entry_x - unit_dx * offset;
        let mut target_label_y = target_entry_y - unit_dy * offset;

        let shift = match theme.label_alignment {
            LabelAlignment::Left => -(theme.label_width + 2.0),
            LabelAlignment::Right => theme.label_width / 2.0,
            LabelAlignment::Center => -(theme.label_width / 2.0),
        };
        source_label_x += shift;
        target_label_x += shift;
        source_label_y -= theme.label_height / 2.0;
        target_label_y -= theme.label_height / 2.0;

        Some(LabelPositions {
            source: (source_label_x, source_label_y),
            target: (target_label_x, target_label_y),
        })
    }
}
