//! Two-pane split layout driven by pointer drags.
//!
//! The layout holds a single percentage (the primary pane's share of the
//! container width). A drag is modelled as a [`DragSession`] borrowed from the
//! layout: pointer-move updates are only accepted while the session is alive,
//! and dropping or releasing it ends the drag. Persisting the final value is
//! left to the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MIN_PERCENT: f64 = 40.0;
pub const DEFAULT_MAX_PERCENT: f64 = 80.0;

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("split bounds must satisfy 0 <= min < max <= 100 (got min {min}, max {max})")]
    InvalidBounds { min: f64, max: f64 },
}

/// Inclusive percentage range for the primary pane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSplitBounds")]
pub struct SplitBounds {
    min: f64,
    max: f64,
}

/// Unchecked wire form; every deserialized value goes through [`SplitBounds::new`].
#[derive(Deserialize)]
struct RawSplitBounds {
    min: f64,
    max: f64,
}

impl TryFrom<RawSplitBounds> for SplitBounds {
    type Error = LayoutError;

    fn try_from(raw: RawSplitBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl Default for SplitBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_PERCENT,
            max: DEFAULT_MAX_PERCENT,
        }
    }
}

impl SplitBounds {
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidBounds`] unless `0 <= min < max <= 100`.
    pub fn new(min: f64, max: f64) -> Result<Self, LayoutError> {
        if !(min.is_finite() && max.is_finite()) || min < 0.0 || max > 100.0 || min >= max {
            return Err(LayoutError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn clamp(self, percent: f64) -> f64 {
        if percent.is_nan() {
            return self.min;
        }
        percent.clamp(self.min, self.max)
    }
}

/// Horizontal extent of the container the split lives in, in pointer
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds {
    pub left: f64,
    pub width: f64,
}

impl ContainerBounds {
    #[must_use]
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplitLayout {
    bounds: SplitBounds,
    percent: f64,
}

impl SplitLayout {
    /// Create a layout, clamping `initial` into `bounds`.
    #[must_use]
    pub fn new(bounds: SplitBounds, initial: f64) -> Self {
        Self {
            bounds,
            percent: bounds.clamp(initial),
        }
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        self.percent
    }

    #[must_use]
    pub fn bounds(&self) -> SplitBounds {
        self.bounds
    }

    /// Secondary pane share.
    #[must_use]
    pub fn remainder(&self) -> f64 {
        100.0 - self.percent
    }

    pub fn set_percent(&mut self, percent: f64) -> f64 {
        self.percent = self.bounds.clamp(percent);
        self.percent
    }

    /// Start a drag against the given container.
    ///
    /// The container is captured once; later pointer moves are measured
    /// against it even if the caller's layout changes mid-drag.
    pub fn begin_drag(&mut self, container: ContainerBounds) -> DragSession<'_> {
        DragSession {
            layout: self,
            container,
            moved: false,
        }
    }
}

impl Default for SplitLayout {
    fn default() -> Self {
        let bounds = SplitBounds::default();
        Self::new(bounds, (bounds.min + bounds.max) / 2.0)
    }
}

/// Live drag. Exists only between drag start and pointer release.
#[derive(Debug)]
pub struct DragSession<'l> {
    layout: &'l mut SplitLayout,
    container: ContainerBounds,
    moved: bool,
}

impl DragSession<'_> {
    /// Apply a pointer move and report the resulting percentage.
    ///
    /// A container without positive width leaves the value untouched.
    pub fn pointer_moved(&mut self, pointer_x: f64) -> f64 {
        if self.container.width > 0.0 && pointer_x.is_finite() {
            let raw = (pointer_x - self.container.left) / self.container.width * 100.0;
            self.layout.set_percent(raw);
            self.moved = true;
        }
        self.layout.percent
    }

    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// End the drag, returning the final percentage.
    #[must_use]
    pub fn release(self) -> f64 {
        self.layout.percent
    }
}
