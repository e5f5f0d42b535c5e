//! Page controller
//!
//! The root of the page stack. It owns the navigator, one behaviour unit
//! per page, the measured layout, the menu and the stack transform, and
//! wires host input through them:
//!
//! - wheel on a static page: threshold, debounce, then one page step
//! - wheel on a scrollable or flip page: routed to the page, whose boundary
//!   signals come back here as page steps
//! - scroll and frame ticks: progress and split updates
//!
//! Everything observable is queued as [`ControllerEvent`]s.

use std::collections::VecDeque;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, trace};

use folio_animation::Debounce;
use folio_core::{
    NavigationOutcome, Navigator, PageIndex, ScrollDirection, SiteConfig,
    UnlockAction, WheelClassifier,
};
use folio_layout::{
    ElementKey, LayoutCache, PageSignal, PageSignals, ScrollablePage, SplitState,
};
use folio_platform::{InputEvent, Rect, ScrollMetrics, Size, WheelEvent};

use crate::error::{FolioError, Result};
use crate::events::ControllerEvent;
use crate::indicator::{self, DotViews, IndicatorInput};
use crate::menu::{Menu, MenuState};
use crate::transform::StackTransform;

/// Host instructions for one wheel event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WheelResponse {
    /// Suppress the host's native scroll
    pub prevent_default: bool,
}

impl WheelResponse {
    fn prevent() -> Self {
        Self {
            prevent_default: true,
        }
    }
}

/// The page stack
pub struct PageController {
    config: SiteConfig,
    navigator: Navigator,
    pages: Vec<ScrollablePage>,
    layout: LayoutCache,
    classifier: WheelClassifier,
    debounce: Debounce,
    menu: Menu,
    transform: StackTransform,
    events: VecDeque<ControllerEvent>,
}

impl PageController {
    /// Build a stack for `config` in a viewport of `viewport`
    pub fn new(config: SiteConfig, viewport: Size) -> Result<Self> {
        config.validate()?;

        let pages = config
            .pages
            .iter()
            .enumerate()
            .map(|(index, spec)| ScrollablePage::new(index, spec, &config.timing, &config.wheel))
            .collect();

        let mut controller = Self {
            navigator: Navigator::new(&config),
            pages,
            layout: LayoutCache::new(viewport),
            classifier: WheelClassifier::new(&config.wheel),
            debounce: Debounce::new(config.timing.debounce()),
            menu: Menu::new(config.timing.menu_close()),
            transform: StackTransform::default(),
            events: VecDeque::new(),
            config,
        };

        let entry = controller.navigator.entry_direction();
        if let Some(first) = controller.pages.first_mut() {
            first.enter(entry);
            first.set_visible(true, &controller.layout);
        }

        debug!(
            pages = controller.pages.len(),
            gate = controller.navigator.unlock_gate(),
            "page controller ready"
        );
        Ok(controller)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn layout(&self) -> &LayoutCache {
        &self.layout
    }

    pub fn current_page(&self) -> PageIndex {
        self.navigator.current_page()
    }

    pub fn page(&self, index: PageIndex) -> Option<&ScrollablePage> {
        self.pages.get(index)
    }

    pub fn pages(&self) -> &[ScrollablePage] {
        &self.pages
    }

    pub fn page_name(&self, index: PageIndex) -> Option<&str> {
        self.config.page(index).map(|page| page.name.as_str())
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    /// Dispatch a raw host event; scroll events apply to the current page
    pub fn handle_input(&mut self, event: &InputEvent, now: Instant) -> WheelResponse {
        match event {
            InputEvent::Wheel(wheel) => self.on_wheel(wheel, now),
            InputEvent::Scroll(metrics) => {
                let current = self.current_page();
                self.scroll_page(current, *metrics, now);
                WheelResponse::default()
            }
            InputEvent::Resize { width, height } => {
                self.resize(Size::new(*width, *height), now);
                WheelResponse::default()
            }
        }
    }

    /// A wheel event over the page stack
    pub fn on_wheel(&mut self, event: &WheelEvent, now: Instant) -> WheelResponse {
        self.settle(now);
        if self.menu.locks_scroll() {
            trace!(menu = ?self.menu.state(), "wheel ignored while menu is up");
            return WheelResponse::prevent();
        }

        let viewport_height = self.layout.viewport_height();
        let delta = self.classifier.normalize(event, viewport_height);
        let source = self.classifier.classify(event, viewport_height);
        let current = self.current_page();
        debug!(page = current, delta, ?source, "wheel");

        if !self.pages[current].kind().manages_wheel() {
            self.static_wheel(delta, now);
            return WheelResponse::prevent();
        }

        let reaction = self.pages[current].on_wheel(delta, source, now);
        self.handle_signals(current, reaction.signals, now);
        WheelResponse {
            prevent_default: reaction.prevent_default,
        }
    }

    fn static_wheel(&mut self, delta: f32, now: Instant) {
        if delta.abs() <= self.config.wheel.page_threshold {
            trace!(delta, "wheel below page threshold");
            return;
        }
        if self.navigator.is_transitioning() {
            trace!("wheel during transition");
            return;
        }
        if !self.debounce.is_open(now) {
            trace!("wheel debounced");
            return;
        }
        let Some(direction) = ScrollDirection::from_delta(delta) else {
            return;
        };
        self.debounce.accept(now);
        self.boundary_scroll(direction, now);
    }

    /// Host reported new metrics for the scroll container of `page`
    pub fn on_scroll(&mut self, page: PageIndex, metrics: ScrollMetrics, now: Instant) -> Result<()> {
        if page >= self.pages.len() {
            return Err(FolioError::NoSuchPage(page));
        }
        self.scroll_page(page, metrics, now);
        Ok(())
    }

    fn scroll_page(&mut self, page: PageIndex, metrics: ScrollMetrics, now: Instant) {
        let signals = self.pages[page].on_scroll(metrics, &self.layout);
        self.handle_signals(page, signals, now);
    }

    /// Step one page in `direction`, as a page at its edge asks for
    pub fn boundary_scroll(&mut self, direction: ScrollDirection, now: Instant) -> NavigationOutcome {
        self.settle(now);
        let outcome = self.navigator.step(direction, now);
        self.apply_outcome(outcome, now);
        outcome
    }

    /// Jump to `target`
    pub fn change_page(&mut self, target: PageIndex, now: Instant) -> NavigationOutcome {
        self.settle(now);
        let outcome = self.navigator.change_page(target, now);
        self.apply_outcome(outcome, now);
        outcome
    }

    /// Indicator dot clicked
    pub fn click_dot(&mut self, index: PageIndex, now: Instant) -> NavigationOutcome {
        self.change_page(index, now)
    }

    /// Jump to the page called `name`
    pub fn go_to(&mut self, name: &str, now: Instant) -> Result<NavigationOutcome> {
        let target = self
            .config
            .page_index(name)
            .ok_or_else(|| FolioError::UnknownPage(name.to_string()))?;
        Ok(self.change_page(target, now))
    }

    fn apply_outcome(&mut self, outcome: NavigationOutcome, now: Instant) {
        let Some(change) = outcome.change() else {
            return;
        };

        self.pages[change.from].leave();
        let entry = self.navigator.entry_direction();
        self.pages[change.to].enter(entry);
        // The page we left stays visible until the slide finishes
        let signals = self.pages[change.to].set_visible(true, &self.layout);

        self.transform
            .slide_to(change.to, now, self.navigator.transition_duration());
        self.events.push_back(ControllerEvent::PageChanged {
            from: change.from,
            to: change.to,
            entry,
        });
        self.handle_signals(change.to, signals, now);
    }

    fn handle_signals(&mut self, page: PageIndex, signals: PageSignals, now: Instant) {
        for signal in signals {
            match signal {
                PageSignal::Progress(progress) => {
                    self.events
                        .push_back(ControllerEvent::Progress { page, progress });
                }
                PageSignal::Split(split_percent) => {
                    self.events.push_back(ControllerEvent::Split {
                        page,
                        split_percent,
                    });
                }
                PageSignal::Boundary(direction) => {
                    if page != self.current_page() {
                        trace!(page, "boundary request from inactive page");
                        continue;
                    }
                    self.boundary_scroll(direction, now);
                }
            }
        }
    }

    /// Advance timers and animations to `now`
    pub fn tick(&mut self, now: Instant) {
        self.settle(now);
        for index in 0..self.pages.len() {
            let signals = self.pages[index].on_frame(now, &self.layout);
            self.handle_signals(index, signals, now);
        }
    }

    /// Finish the slide and menu animations whose deadlines have passed
    fn settle(&mut self, now: Instant) {
        if self.navigator.tick(now) {
            let page = self.current_page();
            self.events
                .push_back(ControllerEvent::TransitionFinished { page });
            self.hide_offscreen(now);
        }

        if self.menu.tick(now) {
            self.events.push_back(ControllerEvent::Menu {
                state: self.menu.state(),
            });
        }
    }

    fn hide_offscreen(&mut self, now: Instant) {
        let current = self.current_page();
        for index in 0..self.pages.len() {
            if index == current || !self.pages[index].is_visible() {
                continue;
            }
            let signals = self.pages[index].set_visible(false, &self.layout);
            self.handle_signals(index, signals, now);
        }
    }

    /// Viewport changed size; cached geometry is dropped until re-recorded
    pub fn resize(&mut self, viewport: Size, now: Instant) {
        self.layout.resize(viewport);
        self.refresh_visible(now);
    }

    /// Host measured an element
    pub fn record_layout(&mut self, key: ElementKey, rect: Rect, now: Instant) {
        self.layout.record(key, rect);
        if let ElementKey::PageContent(page) = key {
            if self.pages.get(page).is_some_and(|p| p.is_visible()) {
                let signals = self.pages[page].refresh(&self.layout);
                self.handle_signals(page, signals, now);
            }
        }
    }

    fn refresh_visible(&mut self, now: Instant) {
        for index in 0..self.pages.len() {
            if self.pages[index].is_visible() {
                let signals = self.pages[index].refresh(&self.layout);
                self.handle_signals(index, signals, now);
            }
        }
    }

    /// Visitor answered the greeting; returns true the first time only
    pub fn unlock(&mut self, action: UnlockAction) -> bool {
        if self.navigator.unlock(action) {
            self.events.push_back(ControllerEvent::Unlocked { action });
            return true;
        }
        false
    }

    pub fn open_menu(&mut self) -> bool {
        let changed = self.menu.open();
        self.menu_changed(changed)
    }

    pub fn close_menu(&mut self, now: Instant) -> bool {
        let changed = self.menu.close(now);
        self.menu_changed(changed)
    }

    pub fn toggle_menu(&mut self, now: Instant) -> bool {
        let changed = self.menu.toggle(now);
        self.menu_changed(changed)
    }

    fn menu_changed(&mut self, changed: bool) -> bool {
        if changed {
            self.events.push_back(ControllerEvent::Menu {
                state: self.menu.state(),
            });
        }
        changed
    }

    /// Stack offset in `vh` at `now`
    pub fn stack_offset(&self, now: Instant) -> f32 {
        self.transform.sample(now)
    }

    pub fn transform(&self) -> &StackTransform {
        &self.transform
    }

    /// Colour state of one indicator dot
    pub fn dot_state(&self, index: PageIndex) -> SplitState {
        let current = self.current_page();
        indicator::dot_state(
            index,
            &self.config.pages[current].backdrop,
            self.pages[current].progress(),
            &self.layout,
        )
    }

    /// Every reachable dot for this frame
    pub fn indicator(&self) -> DotViews {
        let current = self.current_page();
        let spec = &self.config.pages[current];
        let input = IndicatorInput {
            current_page: current,
            accessible_pages: self.navigator.accessible_page_count(),
            backdrop: &spec.backdrop,
            progress: self.pages[current].progress(),
            capsule: spec.shows_capsule(),
        };
        indicator::render(&input, &self.layout)
    }

    /// Take every event queued since the last call
    pub fn drain_events(&mut self) -> Vec<ControllerEvent> {
        self.events.drain(..).collect()
    }

    /// Drop timers and animations; nothing fires after this
    pub fn teardown(&mut self) {
        self.navigator.teardown();
        self.menu.teardown();
        for page in &mut self.pages {
            page.cancel_scroll();
        }
        self.transform.snap_to(self.navigator.current_page());
        self.events.clear();
        debug!("page controller torn down");
    }
}
