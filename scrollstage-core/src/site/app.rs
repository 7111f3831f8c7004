use crate::assets::sequence::{FrameSequence, LoadProgress, LoadState};
use crate::foundation::error::StageResult;
use crate::player::scrub::{Player, PlayerUpdate};
use crate::scroll::observer::ScrollObserver;
use crate::scroll::region::ScrollMetrics;
use crate::site::contact::ContactForm;
use crate::site::routes::Route;
use crate::site::showcase::ShowcaseContent;

/// Everything that can happen to the site.
///
/// Scroll events, load completions, and form edits all funnel through
/// [`SiteApp::handle`]; there is no other way to mutate site state.
#[derive(Debug)]
pub enum SiteEvent {
    /// Navigate to a page.
    Navigate(Route),
    /// Raw scroll offset observed on the home page.
    Scroll {
        /// Absolute scroll offset in pixels.
        offset: f64,
    },
    /// Host animation-frame tick; drains at most one scroll observation.
    Tick,
    /// One more frame of the sequence finished loading.
    SequenceProgress(LoadProgress),
    /// The whole sequence finished loading.
    SequenceReady(FrameSequence),
    /// Any frame of the sequence failed to load; terminal.
    SequenceFailed,
    /// Contact form name edit.
    SetContactName(String),
    /// Contact form email edit.
    SetContactEmail(String),
    /// Contact form message edit.
    SetContactMessage(String),
    /// Contact form submission.
    SubmitContact,
}

/// Owned state of the whole site, driven through one event loop.
///
/// This models the source environment's single UI thread: every piece of
/// mutable state (route, load counters, current frame, form fields) is only
/// ever touched from [`SiteApp::handle`], so ordering needs no further
/// synchronization.
#[derive(Debug)]
pub struct SiteApp {
    route: Route,
    contact: ContactForm,
    player: Player,
    observer: ScrollObserver,
    metrics: ScrollMetrics,
    load: LoadState,
    total_frames: u32,
}

impl SiteApp {
    /// Build the site around a validated showcase definition.
    pub fn new(content: &ShowcaseContent, viewport_height: f64) -> StageResult<Self> {
        content.validate()?;
        let metrics = ScrollMetrics::spanning(viewport_height, content.scroll_span_factor)?;
        Ok(Self {
            route: Route::Home,
            contact: ContactForm::new(),
            player: Player::new(content.overlays.clone())?,
            observer: ScrollObserver::new(metrics),
            metrics,
            load: LoadState::new(content.locator.count),
            total_frames: content.locator.count,
        })
    }

    /// Current route.
    pub fn route(&self) -> Route {
        self.route
    }

    /// Contact form state.
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// The frame player embedded in the home page.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Sequence load state (drives the loading indicator).
    pub fn load(&self) -> LoadState {
        self.load
    }

    /// Apply one event; returns a player update when the visual state of
    /// the showcase changed.
    pub fn handle(&mut self, event: SiteEvent) -> StageResult<Option<PlayerUpdate>> {
        match event {
            SiteEvent::Navigate(route) => {
                self.navigate(route);
                Ok(None)
            }
            SiteEvent::Scroll { offset } => {
                self.observer.observe(offset);
                Ok(None)
            }
            SiteEvent::Tick => Ok(self
                .observer
                .take()
                .and_then(|progress| self.player.advance_to(progress))),
            SiteEvent::SequenceProgress(progress) => {
                self.load.record(progress);
                Ok(None)
            }
            SiteEvent::SequenceReady(sequence) => {
                self.load.complete();
                Ok(self.player.ready(sequence))
            }
            SiteEvent::SequenceFailed => {
                self.load.fail();
                self.player.fail();
                Ok(None)
            }
            SiteEvent::SetContactName(value) => {
                self.contact.set_name(value);
                Ok(None)
            }
            SiteEvent::SetContactEmail(value) => {
                self.contact.set_email(value);
                Ok(None)
            }
            SiteEvent::SetContactMessage(value) => {
                self.contact.set_message(value);
                Ok(None)
            }
            SiteEvent::SubmitContact => {
                self.contact.submit()?;
                Ok(None)
            }
        }
    }

    fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        if self.route == Route::Home {
            // Leaving the showcase: tear the component down so stale scroll
            // or load callbacks become no-ops.
            self.player.detach();
            self.observer.detach();
        }
        if route == Route::Home {
            // Re-entering remounts a fresh component instance.
            self.player.reset();
            self.observer = ScrollObserver::new(self.metrics);
            self.load = LoadState::new(self.total_frames);
        }
        self.route = route;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/app.rs"]
mod tests;
