//! Coordinate-space value types.
//!
//! Canvas points are relative to the game's rendering surface; screen points are
//! relative to the physical display. The two are distinct types and convert only
//! through an explicit canvas origin so they can never be mixed by accident.
use std::fmt;

/// Point relative to the rendering canvas origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasPoint {
    pub x: i32,
    pub y: i32,
}

impl CanvasPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translates into absolute screen space given where the canvas sits on screen.
    pub const fn to_screen(self, canvas_origin: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(canvas_origin.x + self.x, canvas_origin.y + self.y)
    }
}

impl fmt::Display for CanvasPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "canvas({}, {})", self.x, self.y)
    }
}

/// Point relative to the physical display origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translates into canvas space given where the canvas sits on screen.
    pub const fn to_canvas(self, canvas_origin: ScreenPoint) -> CanvasPoint {
        CanvasPoint::new(self.x - canvas_origin.x, self.y - canvas_origin.y)
    }
}

impl fmt::Display for ScreenPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "screen({}, {})", self.x, self.y)
    }
}

/// Axis-aligned clickable rectangle in canvas space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hitbox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Hitbox {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of `size` pixels whose geometric center is `center`.
    pub const fn centered_square(center: CanvasPoint, size: i32) -> Self {
        Self::new(center.x - size / 2, center.y - size / 2, size, size)
    }

    /// Returns true when both dimensions are strictly positive.
    ///
    /// Only hitboxes with area are ever reported as a located match.
    pub const fn has_area(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub const fn contains(&self, point: CanvasPoint) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }

    pub const fn origin(&self) -> CanvasPoint {
        CanvasPoint::new(self.x, self.y)
    }
}

impl fmt::Display for Hitbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {} {}x{}]",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Visible canvas bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn contains(&self, point: CanvasPoint) -> bool {
        point.x >= 0 && point.y >= 0 && point.x < self.width && point.y < self.height
    }
}
