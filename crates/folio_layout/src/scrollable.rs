//! Reusable page behaviour
//!
//! A [`ScrollablePage`] owns everything a page needs to react to wheel and
//! scroll input: its scroll container, the smooth scroller, the boundary
//! flags and the derived visual state (progress, colour split, overlay and
//! strike-through).
//!
//! Pages never touch navigation state. Anything the controller has to act
//! on is returned as a [`PageSignal`].

use std::time::Instant;

use smallvec::SmallVec;
use tracing::{debug, trace};

use folio_core::{
    EntryDirection, PageKind, PageSpec, ScrollDirection, SplitSpec, TimingConfig, WheelConfig,
    WheelSource,
};
use folio_platform::ScrollMetrics;

use crate::cache::{ElementKey, LayoutCache};
use crate::container::ScrollContainer;
use crate::progress::{overlay_opacity, remap_range, segment_progress};
use crate::split::compute_split;

/// Something a page reports back to its controller
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageSignal {
    /// Scroll progress changed, `0..=1`
    Progress(f32),
    /// The page wants to hand the gesture to the page stack
    Boundary(ScrollDirection),
    /// Colour split of the page content changed, `0..=100`
    Split(f32),
}

/// Signals produced by a single input or frame
pub type PageSignals = SmallVec<[PageSignal; 4]>;

/// Outcome of feeding one wheel event to a page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WheelReaction {
    /// Host must suppress its native scroll for this event
    pub prevent_default: bool,
    pub signals: PageSignals,
}

impl WheelReaction {
    fn native() -> Self {
        Self::default()
    }

    fn handled() -> Self {
        Self {
            prevent_default: true,
            signals: PageSignals::new(),
        }
    }

    /// Boundary request forwarded to the controller, if any
    pub fn boundary(&self) -> Option<ScrollDirection> {
        self.signals.iter().find_map(|signal| match signal {
            PageSignal::Boundary(direction) => Some(*direction),
            _ => None,
        })
    }
}

/// Derived visual state of a page
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageVisual {
    pub progress: f32,
    /// `None` for pages without a split backdrop
    pub split_percent: Option<f32>,
    pub overlay_opacity: f32,
    /// Strike-through drawn so far, `0..=100`
    pub strikethrough: f32,
}

/// Wheel, scroll and colour-split behaviour of one page
#[derive(Clone, Debug)]
pub struct ScrollablePage {
    index: usize,
    kind: PageKind,
    terminal: bool,
    reset_on_leave: bool,
    fixed_progress: Option<f32>,
    split: Option<SplitSpec>,
    container: ScrollContainer,
    visual: PageVisual,
    visible: bool,
    active: bool,
    entry: EntryDirection,
    smooth_multiplier: f32,
    page_threshold: f32,
}

impl ScrollablePage {
    pub fn new(index: usize, spec: &PageSpec, timing: &TimingConfig, wheel: &WheelConfig) -> Self {
        let split = spec.backdrop.split().copied();
        Self {
            index,
            kind: spec.kind,
            terminal: spec.terminal,
            reset_on_leave: spec.reset_on_leave,
            fixed_progress: spec.fixed_progress,
            split,
            container: ScrollContainer::new(ScrollMetrics::default(), timing.smooth_scroll()),
            visual: PageVisual {
                progress: spec.fixed_progress.unwrap_or(0.0),
                split_percent: split.map(|s| s.rest_percent),
                overlay_opacity: 0.0,
                strikethrough: 0.0,
            },
            visible: false,
            active: false,
            entry: EntryDirection::Initial,
            smooth_multiplier: wheel.smooth_multiplier,
            page_threshold: wheel.page_threshold,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Direction the page was last entered from
    pub fn entry(&self) -> EntryDirection {
        self.entry
    }

    pub fn progress(&self) -> f32 {
        self.visual.progress
    }

    pub fn visual(&self) -> PageVisual {
        self.visual
    }

    /// Strike-through of word `index` when the line sweeps words of
    /// `weights` in turn, `0..=100`
    pub fn word_strike(&self, weights: &[f32], index: usize) -> f32 {
        segment_progress(self.visual.strikethrough, weights, index)
    }

    pub fn split_spec(&self) -> Option<&SplitSpec> {
        self.split.as_ref()
    }

    pub fn container(&self) -> &ScrollContainer {
        &self.container
    }

    /// Route a normalized wheel delta (pixels) to the page
    pub fn on_wheel(&mut self, delta_y: f32, source: WheelSource, now: Instant) -> WheelReaction {
        if !self.active {
            return WheelReaction::native();
        }
        let Some(direction) = ScrollDirection::from_delta(delta_y) else {
            return WheelReaction::native();
        };

        match self.kind {
            PageKind::Static => WheelReaction::native(),
            PageKind::Flip => {
                let mut reaction = WheelReaction::native();
                if delta_y.abs() > self.page_threshold {
                    reaction.signals.extend(self.forward(direction));
                }
                reaction
            }
            PageKind::Scrollable => match source {
                WheelSource::MouseWheel => {
                    let mut reaction = WheelReaction::handled();
                    if self.container.flags().blocks(direction) {
                        reaction.signals.extend(self.forward(direction));
                    } else {
                        let target = self
                            .container
                            .smooth_scroll_by(delta_y * self.smooth_multiplier, now);
                        trace!(page = self.index, target, "smooth scroll");
                    }
                    reaction
                }
                WheelSource::Touchpad => {
                    if !self.container.flags().blocks(direction) {
                        return WheelReaction::native();
                    }
                    match self.forward(direction) {
                        Some(signal) => {
                            let mut reaction = WheelReaction::handled();
                            reaction.signals.push(signal);
                            reaction
                        }
                        None => WheelReaction::native(),
                    }
                }
            },
        }
    }

    fn forward(&self, direction: ScrollDirection) -> Option<PageSignal> {
        if self.terminal && direction == ScrollDirection::Down {
            trace!(page = self.index, "terminal page keeps downward scroll");
            return None;
        }
        debug!(page = self.index, direction = direction.as_str(), "boundary scroll");
        Some(PageSignal::Boundary(direction))
    }

    /// Host reported new scroll metrics for the page's container
    pub fn on_scroll(&mut self, metrics: ScrollMetrics, cache: &LayoutCache) -> PageSignals {
        self.container.on_scroll(metrics);
        self.refresh(cache)
    }

    /// Advance the smooth scroll, if one is running
    pub fn on_frame(&mut self, now: Instant, cache: &LayoutCache) -> PageSignals {
        match self.container.frame(now) {
            Some(_) => self.refresh(cache),
            None => PageSignals::new(),
        }
    }

    /// Scroll offset the host should apply, while a smooth scroll runs
    pub fn scroll_top(&self) -> f32 {
        self.container.scroll_top()
    }

    /// Recompute progress and split from the current metrics and geometry
    pub fn refresh(&mut self, cache: &LayoutCache) -> PageSignals {
        let mut signals = PageSignals::new();

        let progress = self
            .fixed_progress
            .unwrap_or_else(|| self.container.progress());
        if progress != self.visual.progress {
            self.visual.progress = progress;
            signals.push(PageSignal::Progress(progress));
        }

        let Some(spec) = self.split else {
            return signals;
        };
        if !self.visible {
            return signals;
        }

        if let Some(strike) = spec.strike {
            self.visual.strikethrough = remap_range(progress, strike.start, strike.end);
        }

        let key = ElementKey::PageContent(self.index);
        let boundary_y = spec.mapping.boundary_y(progress, cache.viewport_height());
        let split = match cache
            .measure(key)
            .and_then(|rect| compute_split(boundary_y, &rect))
        {
            Ok(split) => split,
            Err(err) => {
                trace!(page = self.index, %err, "skipping split update");
                return signals;
            }
        };

        self.visual.overlay_opacity = overlay_opacity(split, spec.overlay_max);
        if self.visual.split_percent != Some(split) {
            self.visual.split_percent = Some(split);
            signals.push(PageSignal::Split(split));
        }
        signals
    }

    /// Page entered or left the viewport
    ///
    /// Off-screen split pages rest at their configured split with no overlay
    /// and no strike-through.
    pub fn set_visible(&mut self, visible: bool, cache: &LayoutCache) -> PageSignals {
        if visible == self.visible {
            return PageSignals::new();
        }
        self.visible = visible;

        if visible {
            return self.refresh(cache);
        }

        let mut signals = PageSignals::new();
        if let Some(spec) = self.split {
            self.visual.overlay_opacity = 0.0;
            self.visual.strikethrough = 0.0;
            if self.visual.split_percent != Some(spec.rest_percent) {
                self.visual.split_percent = Some(spec.rest_percent);
                signals.push(PageSignal::Split(spec.rest_percent));
            }
        }
        signals
    }

    /// Page became the current page
    pub fn enter(&mut self, entry: EntryDirection) {
        self.active = true;
        self.entry = entry;
    }

    /// Stop any running smooth scroll where it is
    pub fn cancel_scroll(&mut self) {
        self.container.cancel_animation();
    }

    /// Page stopped being the current page
    pub fn leave(&mut self) {
        self.active = false;
        self.container.cancel_animation();
        if self.reset_on_leave {
            self.container.reset();
            self.visual.progress = self.fixed_progress.unwrap_or(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use folio_core::{Backdrop, SplitMapping, Tone};
    use folio_platform::{Rect, Size};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn page(kind: PageKind, backdrop: Backdrop) -> ScrollablePage {
        let spec = PageSpec::new("page", kind, backdrop);
        let mut page = ScrollablePage::new(
            2,
            &spec,
            &TimingConfig::default(),
            &WheelConfig::default(),
        );
        page.enter(EntryDirection::FromAbove);
        page
    }

    fn split_backdrop() -> Backdrop {
        Backdrop::Split(
            SplitSpec::new(SplitMapping::Descending, Tone::Light, Tone::Dark, 100.0)
                .with_overlay(0.4)
                .with_strike(0.3, 0.8),
        )
    }

    fn cache_with_content() -> LayoutCache {
        let mut cache = LayoutCache::new(Size::new(1200.0, 800.0));
        cache.record(
            ElementKey::PageContent(2),
            Rect::new(0.0, 200.0, 1200.0, 400.0),
        );
        cache
    }

    #[test]
    fn test_mouse_wheel_starts_smooth_scroll() {
        let t0 = Instant::now();
        let cache = LayoutCache::new(Size::new(1200.0, 800.0));
        let mut page = page(PageKind::Scrollable, Backdrop::Dark);
        page.on_scroll(ScrollMetrics::new(0.0, 2000.0, 800.0), &cache);

        let reaction = page.on_wheel(120.0, WheelSource::MouseWheel, t0);
        assert!(reaction.prevent_default);
        assert!(reaction.signals.is_empty());
        assert_eq!(page.container().animation_target(), Some(216.0));

        let signals = page.on_frame(t0 + ms(400), &cache);
        assert_eq!(page.scroll_top(), 216.0);
        assert_eq!(signals.as_slice(), &[PageSignal::Progress(0.18)]);
    }

    #[test]
    fn test_mouse_wheel_at_bottom_forwards() {
        let t0 = Instant::now();
        let cache = LayoutCache::default();
        let mut page = page(PageKind::Scrollable, Backdrop::Dark);
        page.on_scroll(ScrollMetrics::new(1200.0, 2000.0, 800.0), &cache);

        let reaction = page.on_wheel(120.0, WheelSource::MouseWheel, t0);
        assert!(reaction.prevent_default);
        assert_eq!(reaction.boundary(), Some(ScrollDirection::Down));
        assert!(!page.container().is_animating());
    }

    #[test]
    fn test_terminal_page_keeps_downward_scroll() {
        let t0 = Instant::now();
        let cache = LayoutCache::default();
        let spec = PageSpec::new("end", PageKind::Scrollable, Backdrop::Dark).terminal();
        let mut page =
            ScrollablePage::new(7, &spec, &TimingConfig::default(), &WheelConfig::default());
        page.enter(EntryDirection::FromAbove);
        page.on_scroll(ScrollMetrics::new(1200.0, 2000.0, 800.0), &cache);

        let mouse = page.on_wheel(120.0, WheelSource::MouseWheel, t0);
        assert!(mouse.prevent_default);
        assert_eq!(mouse.boundary(), None);

        let touch = page.on_wheel(30.0, WheelSource::Touchpad, t0);
        assert!(!touch.prevent_default);
        assert_eq!(touch.boundary(), None);

        page.on_scroll(ScrollMetrics::new(0.0, 2000.0, 800.0), &cache);
        let up = page.on_wheel(-30.0, WheelSource::Touchpad, t0);
        assert_eq!(up.boundary(), Some(ScrollDirection::Up));
    }

    #[test]
    fn test_touchpad_at_top_forwards_up() {
        let t0 = Instant::now();
        let cache = LayoutCache::default();
        let mut page = page(PageKind::Scrollable, Backdrop::Dark);
        page.on_scroll(ScrollMetrics::new(0.0, 2000.0, 800.0), &cache);

        let reaction = page.on_wheel(-37.0, WheelSource::Touchpad, t0);
        assert!(reaction.prevent_default);
        assert_eq!(reaction.boundary(), Some(ScrollDirection::Up));

        page.on_scroll(ScrollMetrics::new(300.0, 2000.0, 800.0), &cache);
        let reaction = page.on_wheel(-37.0, WheelSource::Touchpad, t0);
        assert!(!reaction.prevent_default);
        assert_eq!(reaction.boundary(), None);
    }

    #[test]
    fn test_flip_page_forwards_large_gestures() {
        let t0 = Instant::now();
        let mut page = page(PageKind::Flip, Backdrop::Light);

        let small = page.on_wheel(30.0, WheelSource::Touchpad, t0);
        assert_eq!(small.boundary(), None);

        let large = page.on_wheel(-60.0, WheelSource::MouseWheel, t0);
        assert!(!large.prevent_default);
        assert_eq!(large.boundary(), Some(ScrollDirection::Up));

        page.leave();
        let inactive = page.on_wheel(-60.0, WheelSource::MouseWheel, t0);
        assert_eq!(inactive.boundary(), None);
    }

    #[test]
    fn test_split_follows_progress() {
        let cache = cache_with_content();
        let mut page = page(PageKind::Scrollable, split_backdrop());
        page.set_visible(true, &cache);

        // progress 0.5, boundary at 400 of an 800 viewport
        let signals = page.on_scroll(ScrollMetrics::new(600.0, 2000.0, 800.0), &cache);
        assert!(signals.contains(&PageSignal::Split(50.0)));
        let visual = page.visual();
        assert_eq!(visual.progress, 0.5);
        assert_eq!(visual.split_percent, Some(50.0));
        assert!((visual.overlay_opacity - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_missing_geometry_skips_split() {
        let cache = LayoutCache::new(Size::new(1200.0, 800.0));
        let mut page = page(PageKind::Scrollable, split_backdrop());
        page.set_visible(true, &cache);

        let signals = page.on_scroll(ScrollMetrics::new(600.0, 2000.0, 800.0), &cache);
        assert_eq!(signals.as_slice(), &[PageSignal::Progress(0.5)]);
        assert_eq!(page.visual().split_percent, Some(100.0));
    }

    #[test]
    fn test_hidden_page_rests() {
        let cache = cache_with_content();
        let mut page = page(PageKind::Scrollable, split_backdrop());
        page.set_visible(true, &cache);
        page.on_scroll(ScrollMetrics::new(600.0, 2000.0, 800.0), &cache);

        let signals = page.set_visible(false, &cache);
        assert_eq!(signals.as_slice(), &[PageSignal::Split(100.0)]);
        assert_eq!(page.visual().overlay_opacity, 0.0);

        // Scrolling while hidden does not move the split
        page.on_scroll(ScrollMetrics::new(900.0, 2000.0, 800.0), &cache);
        assert_eq!(page.visual().split_percent, Some(100.0));
    }

    #[test]
    fn test_leave_resets_when_configured() {
        let t0 = Instant::now();
        let cache = LayoutCache::default();
        let spec = PageSpec::new("story", PageKind::Scrollable, Backdrop::Dark).reset_on_leave();
        let mut page =
            ScrollablePage::new(5, &spec, &TimingConfig::default(), &WheelConfig::default());
        page.enter(EntryDirection::FromAbove);
        page.on_scroll(ScrollMetrics::new(600.0, 2000.0, 800.0), &cache);
        page.on_wheel(120.0, WheelSource::MouseWheel, t0);

        page.leave();
        assert!(!page.is_active());
        assert!(!page.container().is_animating());
        assert_eq!(page.scroll_top(), 0.0);
        assert_eq!(page.progress(), 0.0);
    }

    #[test]
    fn test_strikethrough_follows_window() {
        let cache = cache_with_content();
        let mut page = page(PageKind::Scrollable, split_backdrop());
        page.set_visible(true, &cache);

        page.on_scroll(ScrollMetrics::new(240.0, 2000.0, 800.0), &cache);
        assert_eq!(page.visual().strikethrough, 0.0);

        // progress 0.55 sits half way through the 0.3..0.8 window
        page.on_scroll(ScrollMetrics::new(660.0, 2000.0, 800.0), &cache);
        assert!((page.visual().strikethrough - 50.0).abs() < 1e-3);

        // Two words of equal length: the first is fully struck, the second not yet
        let words = [5.0, 5.0];
        assert!((page.word_strike(&words, 0) - 100.0).abs() < 1e-3);
        assert!(page.word_strike(&words, 1).abs() < 1e-3);

        page.on_scroll(ScrollMetrics::new(1100.0, 2000.0, 800.0), &cache);
        assert_eq!(page.visual().strikethrough, 100.0);

        page.set_visible(false, &cache);
        assert_eq!(page.visual().strikethrough, 0.0);
        assert_eq!(page.word_strike(&words, 0), 0.0);
    }

    #[test]
    fn test_ascending_split_rests_at_zero() {
        let mut cache = LayoutCache::new(Size::new(1200.0, 800.0));
        cache.record(
            ElementKey::PageContent(7),
            Rect::new(0.0, 0.0, 1200.0, 800.0),
        );
        let spec = PageSpec::new(
            "conclusion",
            PageKind::Scrollable,
            Backdrop::Split(SplitSpec::new(
                SplitMapping::Ascending,
                Tone::Light,
                Tone::Dark,
                0.0,
            )),
        )
        .terminal();
        let mut page =
            ScrollablePage::new(7, &spec, &TimingConfig::default(), &WheelConfig::default());
        page.enter(EntryDirection::FromAbove);
        assert_eq!(page.visual().split_percent, Some(0.0));

        // The boundary sinks as the page scrolls: progress 0.75 puts it at 600
        page.set_visible(true, &cache);
        let signals = page.on_scroll(ScrollMetrics::new(900.0, 2000.0, 800.0), &cache);
        assert!(signals.contains(&PageSignal::Split(75.0)));

        let signals = page.set_visible(false, &cache);
        assert_eq!(signals.as_slice(), &[PageSignal::Split(0.0)]);
        assert_eq!(page.visual().split_percent, Some(0.0));
    }

    #[test]
    fn test_double_rate_split_finishes_half_way() {
        let cache = cache_with_content();
        let spec = PageSpec::new(
            "essay",
            PageKind::Scrollable,
            Backdrop::Split(SplitSpec::new(
                SplitMapping::DoubleRate,
                Tone::Dark,
                Tone::Light,
                100.0,
            )),
        );
        let mut page =
            ScrollablePage::new(2, &spec, &TimingConfig::default(), &WheelConfig::default());
        page.enter(EntryDirection::FromAbove);
        page.set_visible(true, &cache);

        // progress 0.25: boundary at 400, half way down the 200..600 block
        page.on_scroll(ScrollMetrics::new(300.0, 2000.0, 800.0), &cache);
        assert_eq!(page.visual().split_percent, Some(50.0));

        // progress 0.5 already pins the boundary to the viewport top
        page.on_scroll(ScrollMetrics::new(600.0, 2000.0, 800.0), &cache);
        assert_eq!(page.visual().split_percent, Some(0.0));
        assert_eq!(page.visual().overlay_opacity, 0.0);
    }

    #[test]
    fn test_fixed_progress_page() {
        let t0 = Instant::now();
        let cache = LayoutCache::default();
        let spec =
            PageSpec::new("gallery", PageKind::Flip, Backdrop::Light).with_fixed_progress(1.0);
        let mut page =
            ScrollablePage::new(6, &spec, &TimingConfig::default(), &WheelConfig::default());
        assert_eq!(page.progress(), 1.0);

        page.enter(EntryDirection::FromAbove);
        let signals = page.set_visible(true, &cache);
        assert!(signals.is_empty());
        page.on_wheel(30.0, WheelSource::Touchpad, t0);
        page.leave();
        assert_eq!(page.progress(), 1.0);
    }
}
