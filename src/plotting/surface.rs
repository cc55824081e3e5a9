//! Retained drawing surface and the reconciliation step that patches it.
//!
//! Components never append to the surface directly. They compute the full
//! list of shapes they want for a class of elements and hand it to
//! [`Surface::reconcile`], which creates, updates and removes elements so
//! the surface matches.

use indexmap::IndexMap;
use log::trace;

use crate::plotting::backend::SvgBackend;
use crate::plotting::element::Text;
use crate::plotting::style::{FillStyle, LineStyle};

/// A two-dimensional shape primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Path {
        d: String,
        style: LineStyle,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: LineStyle,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: FillStyle,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: FillStyle,
    },
    Text(Text),
    /// Children drawn relative to `translate`
    Group {
        translate: (f64, f64),
        children: Vec<Shape>,
    },
}

/// Identity of an element on the surface: its class and position within it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementKey {
    pub class: String,
    pub index: usize,
}

impl ElementKey {
    pub fn new(class: impl Into<String>, index: usize) -> Self {
        ElementKey {
            class: class.into(),
            index,
        }
    }
}

/// Changes applied to a surface by one or more reconciliations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch {
    pub created: Vec<ElementKey>,
    pub updated: Vec<ElementKey>,
    pub removed: Vec<ElementKey>,
}

impl Patch {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }

    /// Fold another patch into this one.
    pub fn merge(&mut self, other: Patch) {
        self.created.extend(other.created);
        self.updated.extend(other.updated);
        self.removed.extend(other.removed);
    }
}

/// Ordered set of keyed shapes owned by one container.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    elements: IndexMap<ElementKey, Shape>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the elements of `class` equal `desired`, index by index.
    ///
    /// Existing elements are updated in place (only when they differ),
    /// missing ones appended, and surplus ones removed.
    pub fn reconcile(&mut self, class: &str, desired: Vec<Shape>) -> Patch {
        let mut patch = Patch::default();
        let keep = desired.len();

        for (index, shape) in desired.into_iter().enumerate() {
            let key = ElementKey::new(class, index);
            match self.elements.get_mut(&key) {
                Some(existing) if *existing == shape => {}
                Some(existing) => {
                    *existing = shape;
                    patch.updated.push(key);
                }
                None => {
                    self.elements.insert(key.clone(), shape);
                    patch.created.push(key);
                }
            }
        }

        let surplus: Vec<ElementKey> = self
            .elements
            .keys()
            .filter(|k| k.class == class && k.index >= keep)
            .cloned()
            .collect();
        for key in surplus {
            self.elements.shift_remove(&key);
            patch.removed.push(key);
        }

        if !patch.is_empty() {
            trace!(
                "reconcile {}: +{} ~{} -{}",
                class,
                patch.created.len(),
                patch.updated.len(),
                patch.removed.len()
            );
        }
        patch
    }

    /// Remove every element of `class`.
    pub fn remove(&mut self, class: &str) -> Patch {
        self.reconcile(class, Vec::new())
    }

    /// Shapes of a class, in index order.
    pub fn select(&self, class: &str) -> Vec<&Shape> {
        let mut found: Vec<(&ElementKey, &Shape)> =
            self.elements.iter().filter(|(k, _)| k.class == class).collect();
        found.sort_by_key(|(k, _)| k.index);
        found.into_iter().map(|(_, s)| s).collect()
    }

    pub fn get(&self, class: &str, index: usize) -> Option<&Shape> {
        self.elements.get(&ElementKey::new(class, index))
    }

    pub fn count(&self, class: &str) -> usize {
        self.elements.keys().filter(|k| k.class == class).count()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Serialize the surface as a standalone SVG document.
    pub fn to_svg(&self, width: f64, height: f64) -> String {
        let mut backend = SvgBackend::new(width, height);
        for (key, shape) in &self.elements {
            backend.draw_shape(Some(&key.class), shape);
        }
        backend.render()
    }
}
