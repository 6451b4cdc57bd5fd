use std::time::{Duration, Instant};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time::{self, MissedTickBehavior};

use crate::command::{ActionId, Command, CommandOutcome, dispatch};
use crate::error::AppResult;
use crate::event::{AppEvent, DomainEvent};

use super::actors::{InputActor, UiActor};
use super::core::App;
use super::event_bus::EventBusRuntime;
use super::terminal_session::TerminalSession;
use super::view_ops::select_wake_timeout;

/// How long after a key/wheel press the loop keeps polling on the short
/// timeout, so bursts of input render without the idle latency.
const INTERACTIVE_WINDOW: Duration = Duration::from_millis(250);

struct LoopRuntime {
    input_actor: InputActor,
    ui_actor: UiActor,
    session: TerminalSession,
    animation_tick: time::Interval,
    input_poll_timeout_idle: Duration,
    input_poll_timeout_busy: Duration,
    loop_event_tx: UnboundedSender<DomainEvent>,
    loop_event_rx: UnboundedReceiver<DomainEvent>,
    loop_event_runtime: EventBusRuntime,
}

enum WaitEvent {
    Event(DomainEvent),
    Closed,
}

enum LoopControl {
    Continue,
    Break,
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let mut runtime = self.initialize_loop_runtime()?;

        loop {
            if self.sync_scroll_bounds(&runtime.session) {
                runtime.ui_actor.mark_redraw();
            }
            for event in self.drain_scroll_notifications(&runtime.session) {
                let _ = runtime.loop_event_tx.send(DomainEvent::App(event));
            }
            for event in self.apply_menu_requests() {
                runtime.ui_actor.mark_redraw();
                let _ = runtime.loop_event_tx.send(DomainEvent::App(event));
            }

            if runtime.ui_actor.needs_redraw() {
                self.render_frame(&mut runtime.session)?;
                runtime.ui_actor.clear_redraw();
            }

            let busy = self.view.animator.is_active()
                || runtime.input_actor.is_interactive(INTERACTIVE_WINDOW);
            let wake_timeout = select_wake_timeout(
                busy,
                runtime.input_poll_timeout_idle,
                runtime.input_poll_timeout_busy,
            );
            let waited = wait_next_event(
                &mut runtime.loop_event_rx,
                &mut runtime.animation_tick,
                wake_timeout,
            )
            .await;
            if matches!(
                self.handle_waited_event(waited, &mut runtime)?,
                LoopControl::Break
            ) {
                break;
            }
        }

        runtime.loop_event_runtime.shutdown();
        runtime.session.restore()?;
        Ok(())
    }

    fn initialize_loop_runtime(&mut self) -> AppResult<LoopRuntime> {
        let loop_started_at = Instant::now();
        let session = TerminalSession::enter()?;
        let (loop_event_tx, loop_event_rx, loop_event_runtime) = EventBusRuntime::spawn();

        let mut animation_tick =
            time::interval(Duration::from_millis(self.config.scroll.animation_tick_ms));
        animation_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Ok(LoopRuntime {
            input_actor: InputActor::new(loop_started_at),
            ui_actor: UiActor::new(),
            session,
            animation_tick,
            input_poll_timeout_idle: Duration::from_millis(
                self.config.scroll.input_poll_timeout_idle_ms,
            ),
            input_poll_timeout_busy: Duration::from_millis(
                self.config.scroll.input_poll_timeout_busy_ms,
            ),
            loop_event_tx,
            loop_event_rx,
            loop_event_runtime,
        })
    }

    fn handle_waited_event(
        &mut self,
        waited: WaitEvent,
        runtime: &mut LoopRuntime,
    ) -> AppResult<LoopControl> {
        match waited {
            WaitEvent::Event(DomainEvent::Input(event)) => {
                let input_outcome = self.handle_input_event(
                    event,
                    &mut runtime.session,
                    runtime.ui_actor.needs_redraw_mut(),
                    runtime.input_actor.last_input_at_mut(),
                )?;
                if input_outcome.quit_requested {
                    return Ok(LoopControl::Break);
                }
                if let Some(command) = input_outcome.command {
                    let _ = runtime.loop_event_tx.send(DomainEvent::Command(command));
                }
            }
            WaitEvent::Event(DomainEvent::InputError(message)) => {
                self.state.status.last_action_id = Some(ActionId::Input);
                self.state.status.message = format!("input error: {message}");
                runtime.ui_actor.mark_redraw();
            }
            WaitEvent::Event(DomainEvent::Command(command)) => {
                // Manual movement takes the viewport back from an in-flight
                // smooth scroll.
                if command.is_manual_scroll() || matches!(command, Command::Cancel) {
                    self.view.animator.cancel();
                }
                let metrics = self.view_metrics(&runtime.session);
                let offset_before = self.state.scroll_offset;
                let dispatch_result = dispatch(
                    &mut self.state,
                    command,
                    &self.nav.controller,
                    metrics,
                    &mut self.interaction.pending_menu,
                )?;
                if self.state.scroll_offset != offset_before {
                    self.publish_scroll();
                }
                for event in dispatch_result.emitted_events {
                    let _ = runtime.loop_event_tx.send(DomainEvent::App(event));
                }
                match dispatch_result.outcome {
                    CommandOutcome::QuitRequested => return Ok(LoopControl::Break),
                    CommandOutcome::Applied | CommandOutcome::Noop => {
                        runtime.ui_actor.mark_redraw()
                    }
                }
            }
            WaitEvent::Event(DomainEvent::App(event)) => {
                self.handle_app_event(event, runtime);
            }
            WaitEvent::Event(DomainEvent::AnimationTick) => {
                if let Some(next) = self.view.animator.advance(self.state.scroll_offset) {
                    self.state.scroll_offset = next;
                    self.publish_scroll();
                    runtime.ui_actor.mark_redraw();
                }
            }
            WaitEvent::Event(DomainEvent::Wake) => {}
            WaitEvent::Closed => return Ok(LoopControl::Break),
        }
        Ok(LoopControl::Continue)
    }

    fn handle_app_event(&mut self, event: AppEvent, runtime: &mut LoopRuntime) {
        match event {
            AppEvent::NavigationRequested { target, .. } => {
                if let Err(err) = self.begin_navigation(&target, &runtime.session) {
                    // The id set is closed; a miss is a caller bug surfaced
                    // on the status line rather than a crash.
                    self.state.status.last_action_id = Some(ActionId::Navigate);
                    self.state.status.message = format!("navigation rejected: {err}");
                }
            }
            AppEvent::SectionChanged { to, .. } => {
                let label = self
                    .nav
                    .controller
                    .items()
                    .iter()
                    .find(|item| item.id == to)
                    .map(|item| item.label.clone())
                    .unwrap_or(to);
                self.state.status.message = format!("section: {label}");
            }
            AppEvent::CommandExecuted { .. }
            | AppEvent::HeaderVisibilityChanged { .. }
            | AppEvent::ModeChanged { .. } => {}
        }
        runtime.ui_actor.mark_redraw();
    }
}

async fn wait_next_event(
    loop_event_rx: &mut UnboundedReceiver<DomainEvent>,
    animation_tick: &mut time::Interval,
    wake_timeout: Duration,
) -> WaitEvent {
    tokio::select! {
        biased;
        maybe_loop = loop_event_rx.recv() => {
            match maybe_loop {
                Some(event) => WaitEvent::Event(event),
                None => WaitEvent::Closed,
            }
        },
        _ = animation_tick.tick() => {
            WaitEvent::Event(DomainEvent::AnimationTick)
        },
        _ = time::sleep(wake_timeout) => {
            WaitEvent::Event(DomainEvent::Wake)
        }
    }
}
