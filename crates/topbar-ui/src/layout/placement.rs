use dioxus_html::geometry::PixelsRect;
use std::fmt;

/// Vertical position of an origin point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    /// The top edge.
    Top,
    /// The vertical center.
    Center,
    /// The bottom edge.
    Bottom,
}

impl Vertical {
    /// Returns the offset from the top edge as a fraction of the height.
    #[inline]
    pub fn factor(self) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => 0.5,
            Self::Bottom => 1.0,
        }
    }

    /// Returns the translation of a box attached at this position,
    /// as a percentage of its height.
    #[inline]
    pub fn shift(self) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => -50.0,
            Self::Bottom => -100.0,
        }
    }

    /// Returns the CSS keyword.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

/// Horizontal position of an origin point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizontal {
    /// The left edge.
    Left,
    /// The horizontal center.
    Center,
    /// The right edge.
    Right,
}

impl Horizontal {
    /// Returns the offset from the left edge as a fraction of the width.
    #[inline]
    pub fn factor(self) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => 0.5,
            Self::Right => 1.0,
        }
    }

    /// Returns the translation of a box attached at this position,
    /// as a percentage of its width.
    #[inline]
    pub fn shift(self) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => -50.0,
            Self::Right => -100.0,
        }
    }

    /// Returns the CSS keyword.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// A point on a box, named by its vertical and horizontal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    /// Vertical position.
    pub vertical: Vertical,
    /// Horizontal position.
    pub horizontal: Horizontal,
}

impl Origin {
    /// The top-right corner.
    pub const TOP_RIGHT: Self = Self::new(Vertical::Top, Horizontal::Right);

    /// Creates a new instance.
    #[inline]
    pub const fn new(vertical: Vertical, horizontal: Horizontal) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

impl fmt::Display for Origin {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.horizontal.as_str(), self.vertical.as_str())
    }
}

/// The client rect of an anchor element in CSS pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    /// The x-coordinate of the left edge.
    pub x: f64,
    /// The y-coordinate of the top edge.
    pub y: f64,
    /// The width.
    pub width: f64,
    /// The height.
    pub height: f64,
}

impl AnchorRect {
    /// Creates a new instance.
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the coordinates of the point selected by `origin`.
    #[inline]
    pub fn point(&self, origin: Origin) -> (f64, f64) {
        (
            self.x + self.width * origin.horizontal.factor(),
            self.y + self.height * origin.vertical.factor(),
        )
    }
}

impl From<PixelsRect> for AnchorRect {
    #[inline]
    fn from(rect: PixelsRect) -> Self {
        Self::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)
    }
}

/// How a popup is aligned against its anchor.
///
/// The point of the anchor selected by `anchor_origin` coincides with the point
/// of the popup selected by `transform_origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The point on the anchor the popup attaches to.
    pub anchor_origin: Origin,
    /// The point on the popup that attaches to the anchor.
    pub transform_origin: Origin,
}

impl Placement {
    /// Top-right corner of the popup on the top-right corner of the anchor.
    pub const TOP_RIGHT: Self = Self::new(Origin::TOP_RIGHT, Origin::TOP_RIGHT);

    /// Creates a new instance.
    #[inline]
    pub const fn new(anchor_origin: Origin, transform_origin: Origin) -> Self {
        Self {
            anchor_origin,
            transform_origin,
        }
    }

    /// Resolves the popup position for the measured anchor.
    pub fn resolve(&self, rect: AnchorRect) -> PopupPosition {
        let (left, top) = rect.point(self.anchor_origin);
        let transform_origin = self.transform_origin;
        PopupPosition {
            top,
            left,
            shift_x: transform_origin.horizontal.shift(),
            shift_y: transform_origin.vertical.shift(),
            transform_origin,
        }
    }
}

/// The resolved position of a popup in fixed (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupPosition {
    /// Distance of the attachment point from the top of the viewport.
    pub top: f64,
    /// Distance of the attachment point from the left of the viewport.
    pub left: f64,
    /// Horizontal translation of the popup as a percentage of its width.
    pub shift_x: f64,
    /// Vertical translation of the popup as a percentage of its height.
    pub shift_y: f64,
    /// The point on the popup placed at the attachment point.
    pub transform_origin: Origin,
}

impl PopupPosition {
    /// Style applied to a popup whose anchor has not been measured yet.
    pub const UNMEASURED_STYLE: &'static str = "visibility: hidden;";

    /// Renders the position as inline CSS declarations.
    pub fn to_style(&self) -> String {
        format!(
            "top: {}px; left: {}px; transform: translate({}%, {}%); transform-origin: {};",
            self.top, self.left, self.shift_x, self.shift_y, self.transform_origin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{AnchorRect, Horizontal, Origin, Placement, Vertical};

    #[test]
    fn it_resolves_top_right_placement() {
        let rect = AnchorRect::new(100.0, 10.0, 80.0, 32.0);
        let position = Placement::TOP_RIGHT.resolve(rect);
        assert_eq!(position.top, 10.0);
        assert_eq!(position.left, 180.0);
        assert_eq!(position.shift_x, -100.0);
        assert_eq!(position.shift_y, 0.0);
        assert_eq!(
            position.to_style(),
            "top: 10px; left: 180px; transform: translate(-100%, 0%); transform-origin: right top;",
        );
    }

    #[test]
    fn it_resolves_other_origins() {
        let rect = AnchorRect::new(20.0, 40.0, 60.0, 30.0);
        let below = Placement::new(
            Origin::new(Vertical::Bottom, Horizontal::Left),
            Origin::new(Vertical::Top, Horizontal::Left),
        );
        let position = below.resolve(rect);
        assert_eq!((position.left, position.top), (20.0, 70.0));
        assert_eq!((position.shift_x, position.shift_y), (0.0, 0.0));

        let centered = Placement::new(
            Origin::new(Vertical::Center, Horizontal::Center),
            Origin::new(Vertical::Bottom, Horizontal::Center),
        );
        let position = centered.resolve(rect);
        assert_eq!((position.left, position.top), (50.0, 55.0));
        assert_eq!((position.shift_x, position.shift_y), (-50.0, -100.0));
        assert!(position.to_style().ends_with("transform-origin: center bottom;"));
    }

    #[test]
    fn it_renders_unshifted_origins_without_sign() {
        let rect = AnchorRect::new(0.0, 0.0, 10.0, 10.0);
        let top_left = Origin::new(Vertical::Top, Horizontal::Left);
        let position = Placement::new(top_left, top_left).resolve(rect);
        assert_eq!(
            position.to_style(),
            "top: 0px; left: 0px; transform: translate(0%, 0%); transform-origin: left top;",
        );
    }
}
