use crate::app_config::AppConfig;
use crate::store::ViewSnapshot;
use crate::ui::fade::FadeEngine;
use crate::ui::frame;
use crate::ui::viewport::Viewport;
use crate::ui::visibility::VisibilityRegistry;
use std::io::{self, Write};
use tokio::sync::mpsc::{Receiver, UnboundedSender, unbounded_channel};
use tokio::sync::watch::Receiver as WatchReceiver;
use tokio::time;
use tracing::instrument;

#[derive(Debug, Eq, PartialEq)]
pub enum UiCommand {
    Scroll(isize),
    Quit,
}

/// Owns the viewport, the visibility registry and the fade engine. Repaints
/// on every snapshot change, scroll and animation tick; returns on quit.
#[instrument(skip_all)]
pub async fn run(mut snapshots: WatchReceiver<ViewSnapshot>, mut commands: Receiver<UiCommand>, config: &AppConfig) {
    let ui = config.ui();
    let mut viewport = Viewport::new(ui.viewport_rows(), ui.card_rows());
    let mut registry = VisibilityRegistry::new(ui.visibility_threshold());
    let mut fades = FadeEngine::new(ui.fade_duration(), ui.tick_interval());
    let (crossing_tx, mut crossing_rx) = unbounded_channel::<(usize, bool)>();
    let mut ticker = time::interval(ui.tick_interval());
    // The tick arm is disabled while nothing animates; don't burst through
    // the missed ticks when it wakes up again.
    ticker.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

    let mut snapshot = snapshots.borrow_and_update().clone();
    observe_cards(&snapshot, &mut viewport, &mut registry, &mut fades, &crossing_tx);
    registry.update(|card| viewport.intersection_ratio(card));
    draw(&frame::render(&snapshot, &viewport, &fades));

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }

                let next = snapshots.borrow_and_update().clone();
                if next.places != snapshot.places {
                    observe_cards(&next, &mut viewport, &mut registry, &mut fades, &crossing_tx);
                }
                snapshot = next;
                registry.update(|card| viewport.intersection_ratio(card));
                draw(&frame::render(&snapshot, &viewport, &fades));
            }
            Some(command) = commands.recv() => {
                match command {
                    UiCommand::Scroll(delta) => {
                        viewport.scroll(delta);
                        registry.update(|card| viewport.intersection_ratio(card));
                        draw(&frame::render(&snapshot, &viewport, &fades));
                    }
                    UiCommand::Quit => break,
                }
            }
            Some((card, visible)) = crossing_rx.recv() => {
                fades.set_target(card, if visible { 1.0 } else { 0.0 });
            }
            _ = ticker.tick(), if fades.animating() => {
                if fades.tick() {
                    draw(&frame::render(&snapshot, &viewport, &fades));
                }
            }
        }
    }
}

/// Re-registers every card after the result set changed. Fades restart from
/// transparent, matching a fresh render of the new results.
fn observe_cards(
    snapshot: &ViewSnapshot,
    viewport: &mut Viewport,
    registry: &mut VisibilityRegistry,
    fades: &mut FadeEngine,
    crossing_tx: &UnboundedSender<(usize, bool)>,
) {
    viewport.set_cards(snapshot.places.len());
    registry.clear();
    fades.clear();

    for card in 0..snapshot.places.len() {
        let tx = crossing_tx.clone();
        registry.register(
            card,
            Box::new(move |visible| {
                let _ = tx.send((card, visible));
            }),
        );
    }
}

fn draw(frame: &str) {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\x1b[2J\x1b[H{}", frame);
    let _ = stdout.flush();
}
