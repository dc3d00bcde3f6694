use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::command::{ActionId, CommandOutcome, dispatch};
use crate::error::AppResult;
use crate::event::{AppEvent, ChangeSource, DomainEvent};

use super::core::App;
use super::event_bus::EventBusRuntime;
use super::terminal_session::{TerminalSession, TerminalSurface};

/// Redraw cadence while an offset animation is on screen.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub(crate) enum WaitEvent {
    Event(DomainEvent),
    Deadline,
    Frame,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue { redraw: bool },
    Break,
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let mut session = TerminalSession::enter()?;
        let mut bus = EventBusRuntime::spawn(self.events_tx.clone());
        info!(page = %self.navigator.current_page(), "popover opened");

        let result = self.drive(&mut session).await;

        bus.shutdown();
        session.restore()?;
        info!("popover closed");
        result
    }

    async fn drive(&mut self, session: &mut impl TerminalSurface) -> AppResult<()> {
        let size = session.size()?;
        self.resize(Rect::new(0, 0, size.width, size.height));

        let mut frame_tick = time::interval(FRAME_INTERVAL);
        frame_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut needs_redraw = true;

        loop {
            if needs_redraw {
                self.draw(&mut *session)?;
            }

            let animating = self.is_animating(Instant::now());
            let waited = wait_next_event(
                &mut self.events_rx,
                self.navigator.next_deadline(),
                &mut frame_tick,
                animating,
            )
            .await;
            match self.handle_waited_event(waited)? {
                LoopControl::Continue { redraw } => needs_redraw = redraw,
                LoopControl::Break => return Ok(()),
            }
        }
    }

    pub(crate) fn handle_waited_event(&mut self, waited: WaitEvent) -> AppResult<LoopControl> {
        let redraw = match waited {
            WaitEvent::Event(DomainEvent::Input(event)) => {
                let outcome = self.handle_input_event(event);
                if let Some(command) = outcome.command {
                    let _ = self.events_tx.send(DomainEvent::Command(command));
                }
                outcome.redraw
            }
            WaitEvent::Event(DomainEvent::InputError(message)) => {
                warn!(%message, "terminal input error");
                self.state.status.last_action_id = Some(ActionId::Input);
                self.state.status.message = format!("input error: {message}");
                true
            }
            WaitEvent::Event(DomainEvent::Command(command)) => {
                let dispatched = dispatch(&mut self.navigator, command);
                for event in dispatched.emitted_events {
                    let _ = self.events_tx.send(DomainEvent::App(event));
                }
                if dispatched.outcome == CommandOutcome::QuitRequested {
                    return Ok(LoopControl::Break);
                }
                true
            }
            WaitEvent::Event(DomainEvent::App(event)) => {
                self.handle_app_event(&event);
                true
            }
            WaitEvent::Deadline => {
                let fired = self.navigator.fire_due();
                debug!(fired, "transition deadline reached");
                fired
            }
            WaitEvent::Frame => true,
            WaitEvent::Closed => return Ok(LoopControl::Break),
        };
        Ok(LoopControl::Continue { redraw })
    }

    fn handle_app_event(&mut self, event: &AppEvent) {
        match event {
            AppEvent::PageChanged(change) => {
                self.state.on_page_changed(change, Instant::now());
                if change.source != ChangeSource::Direct {
                    self.state.status.last_action_id = Some(ActionId::Gesture);
                }
            }
            AppEvent::CommandExecuted { id, outcome } => {
                self.state.status.last_action_id = Some(*id);
                if *outcome == CommandOutcome::Noop {
                    self.state.status.message = format!("{}: already there", id.as_str());
                }
            }
        }
    }

    /// Handles everything already queued without waiting. Returns false once
    /// a quit was processed.
    #[cfg(test)]
    pub(crate) fn pump(&mut self) -> AppResult<bool> {
        while let Ok(event) = self.events_rx.try_recv() {
            if self.handle_waited_event(WaitEvent::Event(event))? == LoopControl::Break {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

async fn wait_next_event(
    events_rx: &mut UnboundedReceiver<DomainEvent>,
    deadline: Option<Instant>,
    frame_tick: &mut time::Interval,
    animating: bool,
) -> WaitEvent {
    let deadline_reached = async {
        match deadline {
            Some(at) => time::sleep_until(time::Instant::from_std(at)).await,
            None => std::future::pending().await,
        }
    };

    tokio::select! {
        biased;
        maybe_event = events_rx.recv() => {
            match maybe_event {
                Some(event) => WaitEvent::Event(event),
                None => WaitEvent::Closed,
            }
        },
        _ = deadline_reached => WaitEvent::Deadline,
        _ = frame_tick.tick(), if animating => WaitEvent::Frame,
    }
}
