use ratatui::layout::Rect;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::config::Config;
use crate::error::AppResult;
use crate::event::{AppEvent, DomainEvent, PageChange};
use crate::host::Collaborators;
use crate::input::KeymapPreset;
use crate::transition::{PageNavigator, PageTransitionController};
use crate::ui::{PopoverLayout, popover_layout};

use super::pointer::{PointScale, PointerTracker};
use super::state::AppState;

/// Screen assumed until the terminal reports its real size.
const DEFAULT_AREA: Rect = Rect::new(0, 0, 80, 24);

pub struct App {
    pub state: AppState,
    pub config: Config,
    pub(crate) navigator: PageNavigator,
    pub(crate) keymap: KeymapPreset,
    pub(crate) pointer: PointerTracker,
    pub(crate) layout: PopoverLayout,
    pub(crate) scale: PointScale,
    pub(crate) events_tx: UnboundedSender<DomainEvent>,
    pub(crate) events_rx: UnboundedReceiver<DomainEvent>,
}

impl App {
    pub fn new() -> AppResult<Self> {
        let config = Config::load()?;
        Self::new_with_config(config)
    }

    pub fn new_with_config(config: Config) -> AppResult<Self> {
        let (events_tx, events_rx) = unbounded_channel();
        let host = Self::collaborators(&config, events_tx.clone());
        Self::assemble(config, host, events_tx, events_rx)
    }

    #[cfg(test)]
    pub(crate) fn new_with_clock(
        config: Config,
        clock: impl crate::host::Clock + 'static,
    ) -> AppResult<Self> {
        let (events_tx, events_rx) = unbounded_channel();
        let host = Self::collaborators(&config, events_tx.clone()).with_clock(clock);
        Self::assemble(config, host, events_tx, events_rx)
    }

    pub fn navigator(&self) -> &PageNavigator {
        &self.navigator
    }

    /// Page changes come back through the loop's own channel so observers
    /// run outside the controller call that produced them.
    fn collaborators(config: &Config, events_tx: UnboundedSender<DomainEvent>) -> Collaborators {
        let sink = move |change: &PageChange| {
            let _ = events_tx.send(DomainEvent::App(AppEvent::PageChanged(*change)));
        };
        Collaborators::new(config.popover.width, config.motion.reduce_motion, sink)
    }

    fn assemble(
        config: Config,
        host: Collaborators,
        events_tx: UnboundedSender<DomainEvent>,
        events_rx: UnboundedReceiver<DomainEvent>,
    ) -> AppResult<Self> {
        let pages = config.page_sequence()?;
        let start = config.start_page()?;
        let controller =
            PageTransitionController::new(pages, start, config.transition_settings(), host);
        let keymap = KeymapPreset::parse(&config.keymap.preset);

        let mut app = Self {
            state: AppState::default(),
            navigator: PageNavigator::new(controller),
            keymap,
            pointer: PointerTracker::default(),
            layout: popover_layout(DEFAULT_AREA),
            scale: PointScale::default(),
            events_tx,
            events_rx,
            config,
        };
        app.resize(DEFAULT_AREA);
        Ok(app)
    }
}
