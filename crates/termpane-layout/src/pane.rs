// ABOUTME: Binary tree of terminal panes.
// ABOUTME: Supports splitting, geometry propagation, and depth-first draw/iterate passes.

use std::fmt;
use std::io;
use std::sync::Arc;

use termpane_core::{Axis, Screen, SplitUnit, Style};

use crate::{Canvas, Rect, Widget};

/// Glyph drawn at the origin of a pane that is too small to render
pub const PLACEHOLDER: &str = "!";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Pane '{0}' is already split")]
    AlreadySplit(String),

    #[error("Pane '{0}' cannot be split by zero")]
    ZeroSplit(String),

    #[error("Pane '{0}' is split and cannot hold a widget")]
    NotALeaf(String),

    #[error("Unknown widget '{widget}' for pane '{pane}'")]
    UnknownWidget { pane: String, widget: String },
}

/// How an internal pane divides its area between its two children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRule {
    pub axis: Axis,
    /// Fixed share; negative goes to the first child, positive to the second
    pub value: i32,
    pub unit: SplitUnit,
}

impl SplitRule {
    /// Partition `base` cells between the two children.
    ///
    /// Returns `None` when the resolved share is zero or leaves nothing for
    /// the other child.
    pub fn resolve(&self, base: u16) -> Option<(u16, u16)> {
        let magnitude = u64::from(self.value.unsigned_abs());
        let calc = match self.unit {
            SplitUnit::Percent => magnitude * u64::from(base) / 100,
            SplitUnit::Char => magnitude,
        };
        if calc < 1 || calc >= u64::from(base) {
            return None;
        }
        // calc < base <= u16::MAX
        let calc = calc as u16;
        if self.value < 0 {
            Some((calc, base - calc))
        } else {
            Some((base - calc, calc))
        }
    }
}

enum Node {
    Leaf,
    Split {
        rule: SplitRule,
        children: Box<[Pane; 2]>,
    },
}

/// A rectangular region of the terminal.
///
/// A pane is either a leaf that renders a [`Widget`], or an internal node
/// that owns exactly two children. Geometry is absolute (relative to the
/// terminal origin) and is only ever derived from the parent, starting from
/// `set_width`/`set_height` on the root.
pub struct Pane {
    name: String,
    node: Node,
    rect: Rect,
    min_width: u16,
    min_height: u16,
    // failed width / height pass
    narrow: bool,
    short: bool,
    style: Option<Arc<Style>>,
    widget: Option<Box<dyn Widget>>,
}

impl Pane {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node: Node::Leaf,
            rect: Rect::default(),
            min_width: 0,
            min_height: 0,
            narrow: false,
            short: false,
            style: None,
            widget: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node, Node::Leaf)
    }

    pub fn split_rule(&self) -> Option<SplitRule> {
        match &self.node {
            Node::Split { rule, .. } => Some(*rule),
            Node::Leaf => None,
        }
    }

    pub fn children(&self) -> Option<&[Pane; 2]> {
        match &self.node {
            Node::Split { children, .. } => Some(children),
            Node::Leaf => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut [Pane; 2]> {
        match &mut self.node {
            Node::Split { children, .. } => Some(children),
            Node::Leaf => None,
        }
    }

    /// Split this leaf into two new leaves named `<name>.1` and `<name>.2`.
    ///
    /// A pane is split at most once; the children are owned by this pane
    /// from now on.
    pub fn split(
        &mut self,
        axis: Axis,
        value: i32,
        unit: SplitUnit,
    ) -> Result<(&mut Pane, &mut Pane), LayoutError> {
        if !self.is_leaf() {
            return Err(LayoutError::AlreadySplit(self.name.clone()));
        }
        if value == 0 {
            return Err(LayoutError::ZeroSplit(self.name.clone()));
        }
        if self.widget.take().is_some() {
            tracing::warn!("Dropping widget of pane '{}' on split", self.name);
        }

        let first = Pane::new(format!("{}.1", self.name));
        let second = Pane::new(format!("{}.2", self.name));
        self.node = Node::Split {
            rule: SplitRule { axis, value, unit },
            children: Box::new([first, second]),
        };

        match &mut self.node {
            Node::Split { children, .. } => {
                let [first, second] = &mut **children;
                Ok((first, second))
            }
            Node::Leaf => unreachable!("node was just split"),
        }
    }

    /// Split into left and right panes. Negative `value` sizes the left one.
    pub fn split_vertically(
        &mut self,
        value: i32,
        unit: SplitUnit,
    ) -> Result<(&mut Pane, &mut Pane), LayoutError> {
        self.split(Axis::Vertical, value, unit)
    }

    /// Split into top and bottom panes. Negative `value` sizes the top one.
    pub fn split_horizontally(
        &mut self,
        value: i32,
        unit: SplitUnit,
    ) -> Result<(&mut Pane, &mut Pane), LayoutError> {
        self.split(Axis::Horizontal, value, unit)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn width(&self) -> u16 {
        self.rect.width
    }

    pub fn height(&self) -> u16 {
        self.rect.height
    }

    pub fn left(&self) -> u16 {
        self.rect.x
    }

    pub fn top(&self) -> u16 {
        self.rect.y
    }

    pub fn min_width(&self) -> u16 {
        self.min_width
    }

    pub fn min_height(&self) -> u16 {
        self.min_height
    }

    /// Minimum content size, border excluded
    pub fn set_min_size(&mut self, width: u16, height: u16) {
        self.min_width = width;
        self.min_height = height;
    }

    /// Minimum width including the style's left and right borders
    pub fn total_min_width(&self) -> u16 {
        let border = self.style.as_ref().map_or(0, |s| s.horizontal());
        self.min_width.saturating_add(border)
    }

    /// Minimum height including the style's top and bottom borders
    pub fn total_min_height(&self) -> u16 {
        let border = self.style.as_ref().map_or(0, |s| s.vertical());
        self.min_height.saturating_add(border)
    }

    /// True when the last geometry pass could not satisfy this pane's
    /// minimum size or split rule
    pub fn is_too_small(&self) -> bool {
        self.narrow || self.short
    }

    pub fn style(&self) -> Option<&Arc<Style>> {
        self.style.as_ref()
    }

    pub fn set_style(&mut self, style: Arc<Style>) {
        self.style = Some(style);
    }

    /// Attach content to this leaf, letting it declare its minimum size.
    pub fn set_widget<W: Widget + 'static>(&mut self, widget: W) -> Result<(), LayoutError> {
        self.set_boxed_widget(Box::new(widget))
    }

    pub fn set_boxed_widget(&mut self, mut widget: Box<dyn Widget>) -> Result<(), LayoutError> {
        if !self.is_leaf() {
            return Err(LayoutError::NotALeaf(self.name.clone()));
        }
        widget.init(self);
        self.widget = Some(widget);
        Ok(())
    }

    pub fn has_widget(&self) -> bool {
        self.widget.is_some()
    }

    pub fn set_left(&mut self, left: u16) {
        self.rect.x = left;
    }

    pub fn set_top(&mut self, top: u16) {
        self.rect.y = top;
    }

    /// Set this pane's width and propagate it down the tree.
    pub fn set_width(&mut self, width: u16) {
        self.rect.width = width;
        let min = self.total_min_width();
        if min > 0 && width < min {
            tracing::trace!("Pane '{}' too narrow: {} < {}", self.name, width, min);
            self.narrow = true;
            return;
        }
        self.narrow = false;

        let left = self.rect.x;
        let Node::Split { rule, children } = &mut self.node else {
            return;
        };
        match rule.axis {
            Axis::Horizontal => {
                for child in children.iter_mut() {
                    child.set_left(left);
                    child.set_width(width);
                }
            }
            Axis::Vertical => {
                let (first, second) = match rule.resolve(width) {
                    Some(shares) => shares,
                    None => {
                        tracing::trace!("Pane '{}' too narrow to split", self.name);
                        self.narrow = true;
                        (0, 0)
                    }
                };
                children[0].set_left(left);
                children[0].set_width(first);
                children[1].set_left(left.saturating_add(first));
                children[1].set_width(second);
            }
        }
    }

    /// Set this pane's height and propagate it down the tree.
    pub fn set_height(&mut self, height: u16) {
        self.rect.height = height;
        let min = self.total_min_height();
        if min > 0 && height < min {
            tracing::trace!("Pane '{}' too short: {} < {}", self.name, height, min);
            self.short = true;
            return;
        }
        self.short = false;

        let top = self.rect.y;
        let Node::Split { rule, children } = &mut self.node else {
            return;
        };
        match rule.axis {
            Axis::Vertical => {
                for child in children.iter_mut() {
                    child.set_top(top);
                    child.set_height(height);
                }
            }
            Axis::Horizontal => {
                let (first, second) = match rule.resolve(height) {
                    Some(shares) => shares,
                    None => {
                        tracing::trace!("Pane '{}' too short to split", self.name);
                        self.short = true;
                        (0, 0)
                    }
                };
                children[0].set_top(top);
                children[0].set_height(first);
                children[1].set_top(top.saturating_add(first));
                children[1].set_height(second);
            }
        }
    }

    /// Position this pane at `rect` and run both geometry passes.
    pub fn layout(&mut self, rect: Rect) {
        self.set_left(rect.x);
        self.set_top(rect.y);
        self.set_width(rect.width);
        self.set_height(rect.height);
    }

    /// Drawing surface for this pane's area
    pub fn canvas<'a>(&self, screen: &'a mut dyn Screen) -> Canvas<'a> {
        Canvas::new(screen, self.rect, self.style.as_deref())
    }

    /// Render the whole subtree: borders first, then widget content.
    pub fn draw(&mut self, screen: &mut dyn Screen) -> io::Result<()> {
        if self.is_too_small() {
            return self.draw_placeholder(screen);
        }
        match &mut self.node {
            Node::Split { children, .. } => {
                for child in children.iter_mut() {
                    child.draw(screen)?;
                }
                Ok(())
            }
            Node::Leaf => {
                let mut canvas = Canvas::new(screen, self.rect, self.style.as_deref());
                if let Some(style) = &self.style {
                    canvas.draw_border(style)?;
                }
                match &mut self.widget {
                    Some(widget) => widget.draw(&mut canvas),
                    None => Ok(()),
                }
            }
        }
    }

    /// Refresh dynamic content of the subtree; borders are left alone.
    pub fn iterate(&mut self, screen: &mut dyn Screen) -> io::Result<()> {
        if self.is_too_small() {
            return self.draw_placeholder(screen);
        }
        match &mut self.node {
            Node::Split { children, .. } => {
                for child in children.iter_mut() {
                    child.iterate(screen)?;
                }
                Ok(())
            }
            Node::Leaf => match &mut self.widget {
                Some(widget) => {
                    let mut canvas = Canvas::new(screen, self.rect, self.style.as_deref());
                    widget.iterate(&mut canvas)
                }
                None => Ok(()),
            },
        }
    }

    fn draw_placeholder(&self, screen: &mut dyn Screen) -> io::Result<()> {
        if self.rect.is_empty() {
            return Ok(());
        }
        screen.put(self.rect.x, self.rect.y, PLACEHOLDER)
    }

    /// Find a pane in this subtree by name, depth first
    pub fn find(&self, name: &str) -> Option<&Pane> {
        if self.name == name {
            return Some(self);
        }
        self.children()?.iter().find_map(|c| c.find(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Pane> {
        if self.name == name {
            return Some(self);
        }
        self.children_mut()?
            .iter_mut()
            .find_map(|c| c.find_mut(name))
    }

    /// All leaves of this subtree, first child before second
    pub fn leaves(&self) -> Vec<&Pane> {
        let mut result = Vec::new();
        collect_leaves(self, &mut result);
        result
    }
}

fn collect_leaves<'a>(pane: &'a Pane, out: &mut Vec<&'a Pane>) {
    match &pane.node {
        Node::Leaf => out.push(pane),
        Node::Split { children, .. } => {
            for child in children.iter() {
                collect_leaves(child, out);
            }
        }
    }
}

impl fmt::Debug for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pane")
            .field("name", &self.name)
            .field("rect", &self.rect)
            .field("split", &self.split_rule())
            .field("too_small", &self.is_too_small())
            .field("widget", &self.widget.is_some())
            .field("children", &self.children())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use termpane_core::MemoryScreen;

    fn rule(value: i32, unit: SplitUnit) -> SplitRule {
        SplitRule {
            axis: Axis::Vertical,
            value,
            unit,
        }
    }

    #[derive(Default)]
    struct Counts {
        draws: AtomicUsize,
        iterations: AtomicUsize,
    }

    struct Probe {
        counts: Arc<Counts>,
        min: (u16, u16),
        label: &'static str,
    }

    impl Probe {
        fn new(counts: &Arc<Counts>, label: &'static str) -> Self {
            Self {
                counts: Arc::clone(counts),
                min: (0, 0),
                label,
            }
        }
    }

    impl Widget for Probe {
        fn init(&mut self, pane: &mut Pane) {
            pane.set_min_size(self.min.0, self.min.1);
        }

        fn render(&mut self, canvas: &mut Canvas<'_>) -> io::Result<()> {
            canvas.write(0, 0, self.label)
        }

        fn draw(&mut self, canvas: &mut Canvas<'_>) -> io::Result<()> {
            self.counts.draws.fetch_add(1, Ordering::SeqCst);
            self.render(canvas)
        }

        fn iterate(&mut self, canvas: &mut Canvas<'_>) -> io::Result<()> {
            self.counts.iterations.fetch_add(1, Ordering::SeqCst);
            self.render(canvas)
        }
    }

    #[test]
    fn percent_split_resolves_either_side() {
        assert_eq!(rule(-50, SplitUnit::Percent).resolve(100), Some((50, 50)));
        assert_eq!(rule(50, SplitUnit::Percent).resolve(100), Some((50, 50)));
        assert_eq!(rule(-30, SplitUnit::Percent).resolve(100), Some((30, 70)));
        assert_eq!(rule(30, SplitUnit::Percent).resolve(100), Some((70, 30)));
    }

    #[test]
    fn char_split_is_fixed() {
        assert_eq!(rule(-40, SplitUnit::Char).resolve(100), Some((40, 60)));
        assert_eq!(rule(40, SplitUnit::Char).resolve(100), Some((60, 40)));
    }

    #[test]
    fn percent_split_floors() {
        assert_eq!(rule(95, SplitUnit::Percent).resolve(10), Some((1, 9)));
        assert_eq!(rule(-33, SplitUnit::Percent).resolve(10), Some((3, 7)));
    }

    #[test]
    fn split_fails_when_share_fills_or_vanishes() {
        assert_eq!(rule(100, SplitUnit::Percent).resolve(10), None);
        assert_eq!(rule(150, SplitUnit::Percent).resolve(10), None);
        assert_eq!(rule(5, SplitUnit::Percent).resolve(10), None);
        assert_eq!(rule(-10, SplitUnit::Char).resolve(10), None);
        assert_eq!(rule(-9, SplitUnit::Char).resolve(10), Some((9, 1)));
        assert_eq!(rule(1, SplitUnit::Char).resolve(0), None);
    }

    #[test]
    fn split_returns_two_leaves() {
        let mut pane = Pane::new("main");
        let (a, b) = pane.split_vertically(-50, SplitUnit::Percent).unwrap();
        assert_eq!(a.name(), "main.1");
        assert_eq!(b.name(), "main.2");
        assert!(a.is_leaf() && b.is_leaf());
        assert!(!pane.is_leaf());
        assert_eq!(
            pane.split_rule(),
            Some(SplitRule {
                axis: Axis::Vertical,
                value: -50,
                unit: SplitUnit::Percent,
            })
        );
    }

    #[test]
    fn split_twice_is_rejected() {
        let mut pane = Pane::new("main");
        pane.split_horizontally(10, SplitUnit::Char).unwrap();
        let err = pane.split_vertically(10, SplitUnit::Char).unwrap_err();
        assert_eq!(err, LayoutError::AlreadySplit("main".to_string()));
    }

    #[test]
    fn zero_split_is_rejected() {
        let mut pane = Pane::new("main");
        let err = pane.split_vertically(0, SplitUnit::Percent).unwrap_err();
        assert_eq!(err, LayoutError::ZeroSplit("main".to_string()));
        assert!(pane.is_leaf());
    }

    #[test]
    fn widget_on_internal_pane_is_rejected() {
        let counts = Arc::new(Counts::default());
        let mut pane = Pane::new("main");
        pane.split_vertically(10, SplitUnit::Char).unwrap();
        let err = pane.set_widget(Probe::new(&counts, "x")).unwrap_err();
        assert_eq!(err, LayoutError::NotALeaf("main".to_string()));
    }

    #[test]
    fn vertical_split_partitions_width_and_shares_height() {
        let mut pane = Pane::new("main");
        pane.split_vertically(-25, SplitUnit::Percent).unwrap();
        pane.layout(Rect::new(0, 0, 80, 24));

        let [left, right] = pane.children().unwrap();
        assert_eq!(left.rect(), Rect::new(0, 0, 20, 24));
        assert_eq!(right.rect(), Rect::new(20, 0, 60, 24));
    }

    #[test]
    fn horizontal_split_partitions_height_and_shares_width() {
        let mut pane = Pane::new("main");
        pane.split_horizontally(4, SplitUnit::Char).unwrap();
        pane.layout(Rect::new(5, 2, 30, 10));

        let [top, bottom] = pane.children().unwrap();
        assert_eq!(top.rect(), Rect::new(5, 2, 30, 6));
        assert_eq!(bottom.rect(), Rect::new(5, 8, 30, 4));
    }

    #[test]
    fn four_quadrant_layout() {
        let mut root = Pane::new("main");
        {
            let (left, right) = root.split_vertically(-50, SplitUnit::Percent).unwrap();
            left.set_name("left");
            right.set_name("right");
            let (lt, lb) = left.split_horizontally(20, SplitUnit::Char).unwrap();
            lt.set_name("left-top");
            lb.set_name("left-bottom");
            let (rt, rb) = right.split_horizontally(20, SplitUnit::Char).unwrap();
            rt.set_name("right-top");
            rb.set_name("right-bottom");
        }
        root.set_width(100);
        root.set_height(40);

        let rect = |name: &str| root.find(name).unwrap().rect();
        assert_eq!(rect("left-top"), Rect::new(0, 0, 50, 20));
        assert_eq!(rect("left-bottom"), Rect::new(0, 20, 50, 20));
        assert_eq!(rect("right-top"), Rect::new(50, 0, 50, 20));
        assert_eq!(rect("right-bottom"), Rect::new(50, 20, 50, 20));
    }

    #[test]
    fn relayout_with_same_input_is_stable() {
        let mut root = Pane::new("main");
        {
            let (_, right) = root.split_vertically(-30, SplitUnit::Percent).unwrap();
            right.split_horizontally(-3, SplitUnit::Char).unwrap();
        }
        root.layout(Rect::new(0, 0, 91, 33));
        let first: Vec<Rect> = root.leaves().iter().map(|p| p.rect()).collect();
        root.layout(Rect::new(0, 0, 91, 33));
        let second: Vec<Rect> = root.leaves().iter().map(|p| p.rect()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn total_minimum_includes_border() {
        let mut pane = Pane::new("main");
        pane.set_min_size(5, 3);
        assert_eq!(pane.total_min_width(), 5);
        pane.set_style(Arc::new(Style::frame()));
        assert_eq!(pane.total_min_width(), 7);
        assert_eq!(pane.total_min_height(), 5);
    }

    #[test]
    fn too_small_follows_minimum() {
        let mut pane = Pane::new("main");
        pane.set_min_size(5, 3);
        pane.set_style(Arc::new(Style::frame()));

        pane.layout(Rect::new(0, 0, 6, 10));
        assert!(pane.is_too_small());

        pane.layout(Rect::new(0, 0, 7, 5));
        assert!(!pane.is_too_small());

        pane.set_height(4);
        assert!(pane.is_too_small());
        pane.set_width(7);
        // width is fine, height still failing
        assert!(pane.is_too_small());
        pane.set_height(5);
        assert!(!pane.is_too_small());
    }

    #[test]
    fn zero_minimum_is_never_too_small() {
        let mut pane = Pane::new("main");
        pane.layout(Rect::new(0, 0, 0, 0));
        assert!(!pane.is_too_small());
    }

    #[test]
    fn failed_split_marks_parent_and_zeroes_children() {
        let mut root = Pane::new("main");
        root.split_vertically(100, SplitUnit::Percent).unwrap();
        root.layout(Rect::new(0, 0, 10, 5));

        assert!(root.is_too_small());
        let [a, b] = root.children().unwrap();
        assert_eq!(a.width(), 0);
        assert_eq!(b.width(), 0);
    }

    #[test]
    fn too_small_pane_draws_placeholder_only() {
        let counts = Arc::new(Counts::default());
        let mut root = Pane::new("main");
        root.split_vertically(-50, SplitUnit::Percent).unwrap();
        root.set_min_size(40, 0);
        for leaf in root.children_mut().unwrap().iter_mut() {
            leaf.set_widget(Probe::new(&counts, "x")).unwrap();
        }

        root.layout(Rect::new(3, 4, 20, 10));
        let mut screen = MemoryScreen::new();
        root.draw(&mut screen).unwrap();
        root.iterate(&mut screen).unwrap();

        assert_eq!(counts.draws.load(Ordering::SeqCst), 0);
        assert_eq!(counts.iterations.load(Ordering::SeqCst), 0);
        assert_eq!(screen.puts.len(), 2);
        assert_eq!(screen.text_at(3, 4), Some(PLACEHOLDER));
    }

    #[test]
    fn degenerate_too_small_pane_draws_nothing() {
        let mut pane = Pane::new("main");
        pane.set_min_size(2, 2);
        pane.layout(Rect::new(0, 0, 0, 5));
        assert!(pane.is_too_small());

        let mut screen = MemoryScreen::new();
        pane.draw(&mut screen).unwrap();
        assert!(screen.puts.is_empty());
    }

    #[test]
    fn recovers_after_growing() {
        let mut pane = Pane::new("main");
        pane.set_min_size(10, 1);
        pane.layout(Rect::new(0, 0, 5, 5));
        assert!(pane.is_too_small());
        pane.layout(Rect::new(0, 0, 50, 5));
        assert!(!pane.is_too_small());
    }

    #[test]
    fn draw_renders_border_then_content() {
        let counts = Arc::new(Counts::default());
        let mut pane = Pane::new("main");
        pane.set_style(Arc::new(Style::frame()));
        pane.set_widget(Probe::new(&counts, "hello")).unwrap();
        pane.layout(Rect::new(0, 0, 10, 4));

        let mut screen = MemoryScreen::new();
        pane.draw(&mut screen).unwrap();

        assert_eq!(screen.puts.first().unwrap().text, "┌");
        assert_eq!(screen.puts.last().unwrap().text, "hello");
        assert_eq!(screen.text_at(1, 1), Some("hello"));
        assert_eq!(counts.draws.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn iterate_skips_border() {
        let counts = Arc::new(Counts::default());
        let mut pane = Pane::new("main");
        pane.set_style(Arc::new(Style::frame()));
        pane.set_widget(Probe::new(&counts, "tick")).unwrap();
        pane.layout(Rect::new(0, 0, 10, 4));

        let mut screen = MemoryScreen::new();
        pane.iterate(&mut screen).unwrap();

        assert_eq!(screen.puts.len(), 1);
        assert_eq!(screen.text_at(1, 1), Some("tick"));
        assert_eq!(counts.iterations.load(Ordering::SeqCst), 1);
        assert_eq!(counts.draws.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn draw_visits_first_child_before_second() {
        let counts = Arc::new(Counts::default());
        let mut root = Pane::new("main");
        {
            let (a, b) = root.split_horizontally(-1, SplitUnit::Char).unwrap();
            a.set_widget(Probe::new(&counts, "first")).unwrap();
            b.set_widget(Probe::new(&counts, "second")).unwrap();
        }
        root.layout(Rect::new(0, 0, 10, 3));

        let mut screen = MemoryScreen::new();
        root.draw(&mut screen).unwrap();
        let texts: Vec<&str> = screen.puts.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(screen.text_at(0, 1), Some("second"));
    }

    #[test]
    fn leaf_without_widget_is_noop() {
        let mut pane = Pane::new("main");
        pane.layout(Rect::new(0, 0, 10, 10));
        let mut screen = MemoryScreen::new();
        pane.draw(&mut screen).unwrap();
        pane.iterate(&mut screen).unwrap();
        assert!(screen.puts.is_empty());
    }

    #[test]
    fn widget_init_declares_minimum() {
        let counts = Arc::new(Counts::default());
        let mut pane = Pane::new("main");
        let mut probe = Probe::new(&counts, "x");
        probe.min = (5, 3);
        pane.set_widget(probe).unwrap();
        assert_eq!((pane.min_width(), pane.min_height()), (5, 3));
    }

    #[test]
    fn shared_style_across_panes() {
        let style = Arc::new(Style::margin());
        let mut root = Pane::new("main");
        {
            let (a, b) = root.split_vertically(-50, SplitUnit::Percent).unwrap();
            a.set_style(Arc::clone(&style));
            b.set_style(Arc::clone(&style));
        }
        assert_eq!(Arc::strong_count(&style), 3);
    }

    #[test]
    fn find_mut_reaches_nested_panes() {
        let mut root = Pane::new("main");
        {
            let (_, right) = root.split_vertically(-50, SplitUnit::Percent).unwrap();
            right.split_horizontally(50, SplitUnit::Percent).unwrap();
        }
        let nested = root.find_mut("main.2.1").unwrap();
        nested.set_name("status");
        assert!(root.find("status").is_some());
        assert!(root.find("main.2.1").is_none());
        assert_eq!(root.leaves().len(), 3);
    }
}
