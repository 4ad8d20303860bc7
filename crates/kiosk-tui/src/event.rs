//! Terminal event handling: reads crossterm events on a blocking task and
//! forwards the ones the kiosk cares about over a channel.
//!
//! Mouse positions stay in terminal cells here; the app converts them to
//! canvas pixels with the viewport that was current when they arrive.

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;
use tokio::sync::mpsc;

use kiosk_core::input::PointerButton;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Moved,
    Down(PointerButton),
}

/// Everything the frame loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Pointer {
        column: u16,
        row: u16,
        kind: PointerKind,
    },
    Resize {
        cols: u16,
        rows: u16,
    },
    /// Close the kiosk (the terminal's stand-in for closing the window).
    Quit,
}

/// Event loop that reads terminal events and sends `HostEvent`s.
pub struct EventHandler {
    tx: mpsc::UnboundedSender<HostEvent>,
    poll_timeout: Duration,
}

impl EventHandler {
    pub fn new(tx: mpsc::UnboundedSender<HostEvent>, poll_timeout: Duration) -> Self {
        Self { tx, poll_timeout }
    }

    /// Run until the receiving side goes away. Should be spawned in a task.
    pub async fn run(&self) {
        loop {
            let timeout = self.poll_timeout;
            let polled = tokio::task::spawn_blocking(move || {
                if event::poll(timeout).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await;

            match polled {
                Ok(Some(event)) => {
                    if let Some(host_event) = map_event(event) {
                        if self.tx.send(host_event).is_err() {
                            break;
                        }
                    }
                }
                Ok(None) => {
                    if self.tx.is_closed() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Event reader task failed: {}", e);
                    break;
                }
            }
        }
    }
}

pub fn map_event(event: Event) -> Option<HostEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(cols, rows) => Some(HostEvent::Resize { cols, rows }),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<HostEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(HostEvent::Quit);
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(HostEvent::Quit),
        _ => None,
    }
}

fn map_mouse(mouse: MouseEvent) -> Option<HostEvent> {
    let kind = match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => PointerKind::Moved,
        MouseEventKind::Down(button) => PointerKind::Down(match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Middle => PointerButton::Middle,
        }),
        _ => return None,
    };
    Some(HostEvent::Pointer {
        column: mouse.column,
        row: mouse.row,
        kind,
    })
}
