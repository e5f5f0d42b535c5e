//! Measured layout cache
//!
//! Element geometry is recorded when layout changes (mount, resize, font
//! load) and read on every scroll tick. Reading never triggers a host
//! measurement, so scroll handlers stay free of forced reflows.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use folio_platform::{Rect, Size};

use crate::error::{LayoutError, Result};

/// Elements whose geometry the engine needs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "element", content = "index", rename_all = "snake_case")]
pub enum ElementKey {
    /// Navigation dot for page `n`
    IndicatorDot(usize),
    /// The colour-split content block of page `n`
    PageContent(usize),
}

/// Geometry cache keyed by element
#[derive(Clone, Debug, Default)]
pub struct LayoutCache {
    viewport: Size,
    rects: FxHashMap<ElementKey, Rect>,
}

impl LayoutCache {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            rects: FxHashMap::default(),
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport.height
    }

    /// Viewport changed; every cached rect is stale until re-recorded
    pub fn resize(&mut self, viewport: Size) {
        if viewport == self.viewport {
            return;
        }
        trace!(
            width = viewport.width,
            height = viewport.height,
            dropped = self.rects.len(),
            "viewport resized, dropping cached geometry"
        );
        self.viewport = viewport;
        self.rects.clear();
    }

    /// Store a fresh measurement
    pub fn record(&mut self, key: ElementKey, rect: Rect) {
        self.rects.insert(key, rect);
    }

    /// Cached geometry for `key`, if it is usable
    pub fn measure(&self, key: ElementKey) -> Result<Rect> {
        let rect = self
            .rects
            .get(&key)
            .copied()
            .ok_or(LayoutError::NotLaidOut(key))?;
        if !rect.is_measurable() {
            return Err(LayoutError::Unmeasured {
                key,
                height: rect.height(),
            });
        }
        Ok(rect)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_measure() {
        let mut cache = LayoutCache::new(Size::new(1280.0, 800.0));
        let key = ElementKey::IndicatorDot(2);
        assert_eq!(cache.measure(key), Err(LayoutError::NotLaidOut(key)));

        cache.record(key, Rect::new(1240.0, 380.0, 12.0, 40.0));
        assert_eq!(cache.measure(key).unwrap().bottom(), 420.0);
    }

    #[test]
    fn test_zero_height_is_unmeasured() {
        let mut cache = LayoutCache::new(Size::new(1280.0, 800.0));
        let key = ElementKey::PageContent(2);
        cache.record(key, Rect::new(0.0, 100.0, 600.0, 0.0));
        assert!(matches!(
            cache.measure(key),
            Err(LayoutError::Unmeasured { .. })
        ));
    }

    #[test]
    fn test_resize_drops_geometry() {
        let mut cache = LayoutCache::new(Size::new(1280.0, 800.0));
        cache.record(ElementKey::IndicatorDot(0), Rect::new(0.0, 0.0, 10.0, 10.0));
        cache.resize(Size::new(1280.0, 800.0));
        assert_eq!(cache.len(), 1);

        cache.resize(Size::new(1024.0, 700.0));
        assert!(cache.is_empty());
        assert_eq!(cache.viewport_height(), 700.0);
    }
}
