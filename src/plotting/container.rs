//! Container owning the drawing surface and its size.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::plotting::error::PlotResult;
use crate::plotting::surface::Surface;

pub const DEFAULT_WIDTH: f64 = 600.0;
pub const DEFAULT_HEIGHT: f64 = 400.0;

/// How the container decides its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sizing {
    /// Keep the configured width and height
    #[default]
    Fixed,
    /// Follow the host element's size on resize
    Host,
}

/// A drawable surface sized to its host (or to a fixed size).
#[derive(Debug, Clone)]
pub struct Container {
    width: f64,
    height: f64,
    sizing: Sizing,
    /// Latest host size reported since the last layout pass
    pending_resize: Option<(f64, f64)>,
    surface: Surface,
}

impl Container {
    /// Create a new container with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Container {
            width,
            height,
            sizing: Sizing::Fixed,
            pending_resize: None,
            surface: Surface::new(),
        }
    }

    /// Set the sizing mode.
    pub fn sizing(mut self, sizing: Sizing) -> Self {
        self.sizing = sizing;
        self
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Explicit size change; applied immediately. Returns whether it changed.
    ///
    /// Sizes that are not finite and positive are ignored.
    pub fn set_size(&mut self, width: f64, height: f64) -> bool {
        if !(width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite()) {
            warn!("ignoring container size {}x{}", width, height);
            return false;
        }
        if self.width == width && self.height == height {
            return false;
        }
        debug!(
            "container resized {}x{} -> {}x{}",
            self.width, self.height, width, height
        );
        self.width = width;
        self.height = height;
        true
    }

    /// Record a host resize. Only the latest size before the next
    /// [`layout_pass`](Self::layout_pass) is applied.
    pub fn notify_resize(&mut self, host_width: f64, host_height: f64) {
        if self.sizing == Sizing::Host {
            self.pending_resize = Some((host_width, host_height));
        }
    }

    /// Apply at most one pending host resize. Returns whether the size changed.
    pub fn layout_pass(&mut self) -> bool {
        match self.pending_resize.take() {
            Some((w, h)) => self.set_size(w, h),
            None => false,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Render the surface to an SVG document string.
    pub fn render(&self) -> String {
        self.surface.to_svg(self.width, self.height)
    }

    /// Save the rendered surface to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let svg = self.render();
        let mut file = File::create(path)?;
        file.write_all(svg.as_bytes())?;
        Ok(())
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size_and_viewbox() {
        let c = Container::default();
        assert_eq!((c.width(), c.height()), (600.0, 400.0));
        assert!(c.render().contains("viewBox=\"0 0 600 400\""));
    }

    #[test]
    fn test_resize_is_debounced_to_layout_pass() {
        let mut c = Container::default().sizing(Sizing::Host);
        c.notify_resize(800.0, 500.0);
        c.notify_resize(900.0, 450.0);
        assert_eq!(c.width(), 600.0);

        assert!(c.layout_pass());
        assert_eq!((c.width(), c.height()), (900.0, 450.0));
        assert!(!c.layout_pass());
    }

    #[test]
    fn test_fixed_sizing_ignores_host() {
        let mut c = Container::new(300.0, 200.0);
        c.notify_resize(800.0, 500.0);
        assert!(!c.layout_pass());
        assert!(c.set_size(320.0, 200.0));
        assert!(!c.set_size(320.0, 200.0));
    }

    #[test]
    fn test_invalid_sizes_are_ignored() {
        let mut c = Container::default().sizing(Sizing::Host);
        assert!(!c.set_size(-100.0, 0.0));
        assert!(!c.set_size(0.0, 400.0));
        assert!(!c.set_size(f64::NAN, 400.0));
        assert!(!c.set_size(600.0, f64::INFINITY));
        assert_eq!((c.width(), c.height()), (600.0, 400.0));

        c.notify_resize(f64::NAN, f64::NAN);
        assert!(!c.layout_pass());
        assert_eq!((c.width(), c.height()), (600.0, 400.0));
    }

    #[test]
    fn test_save_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");
        Container::default().save(&path).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("viewBox=\"0 0 600 400\""));
    }
}
