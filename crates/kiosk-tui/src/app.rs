//! Kiosk host: terminal setup and the fixed-rate frame loop.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, error::TryRecvError};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use kiosk_core::geometry::Size;
use kiosk_core::input::InputEvent;
use kiosk_core::{Assets, Catalog, Director, Flow, KioskConfig, SceneContext};

use crate::event::{EventHandler, HostEvent, PointerKind};
use crate::images::FsImageLoader;
use crate::platform::TerminalPlatform;
use crate::surface::TerminalSurface;
use crate::viewport::Viewport;

/// Main application state.
pub struct App {
    director: Director,
    platform: TerminalPlatform,
    canvas: Size,
    frame_period: Duration,
    title: String,
    /// Grid the last events were received on.
    viewport: Viewport,
}

impl App {
    /// Load assets and start on the splash screen.
    pub fn new(config: &KioskConfig) -> Self {
        let catalog = Catalog::new(config.catalog.clone());
        let assets = Assets::load(config, &catalog, &FsImageLoader);
        let canvas = config.canvas();
        let ctx = SceneContext {
            catalog,
            assets: Rc::new(assets),
            canvas,
            heading: config.display.heading.clone(),
        };

        Self {
            director: Director::new(ctx),
            platform: TerminalPlatform::new(&config.asset_path(&config.assets.click_sound)),
            canvas,
            frame_period: Duration::from_secs_f64(1.0 / config.display.fps.max(1) as f64),
            title: config.display.title.clone(),
            viewport: Viewport::new(canvas, 1, 1),
        }
    }

    /// Run the kiosk until the user exits or quits.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        // Set up terminal.
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            SetTitle(&self.title)
        )?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal).await;

        // Restore terminal, even when the loop failed.
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<HostEvent>();
        let event_handler = EventHandler::new(tx, Duration::from_millis(50));
        tokio::spawn(async move {
            event_handler.run().await;
        });

        let (cols, rows) = crossterm::terminal::size()?;
        self.viewport = Viewport::new(self.canvas, cols, rows);
        info!(cols, rows, period_ms = self.frame_period.as_millis() as u64, "Kiosk started");

        let mut interval = tokio::time::interval(self.frame_period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last_frame = Instant::now();

        loop {
            interval.tick().await;

            // Events of this frame, in arrival order.
            loop {
                match rx.try_recv() {
                    Ok(event) => {
                        if self.handle_host_event(event)? == Flow::Exit {
                            return Ok(());
                        }
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        warn!("Event channel closed, shutting down");
                        return Ok(());
                    }
                }
            }

            // A slow frame simply produces a larger delta.
            let now = Instant::now();
            let dt = now.duration_since(last_frame).as_secs_f32();
            last_frame = now;
            if self.director.tick(dt, &mut self.platform)? == Flow::Exit {
                return Ok(());
            }

            terminal.draw(|frame| {
                let mut surface = TerminalSurface::new(frame.buffer_mut(), self.canvas);
                self.director.render(&mut surface);
            })?;
        }
    }

    /// Translate one host event and feed it to the director.
    fn handle_host_event(&mut self, event: HostEvent) -> anyhow::Result<Flow> {
        let input = match event {
            HostEvent::Quit => {
                info!("Quit requested");
                return Ok(Flow::Exit);
            }
            HostEvent::Resize { cols, rows } => {
                debug!(cols, rows, "Terminal resized");
                self.viewport = Viewport::new(self.canvas, cols, rows);
                return Ok(Flow::Continue);
            }
            HostEvent::Pointer { column, row, kind } => {
                let position = self.viewport.to_canvas(column, row);
                match kind {
                    PointerKind::Moved => InputEvent::PointerMoved(position),
                    PointerKind::Down(button) => InputEvent::PointerDown { position, button },
                }
            }
        };

        let flow = self.director.dispatch(&input, &mut self.platform)?;
        if self.platform.exit_requested() {
            return Ok(Flow::Exit);
        }
        Ok(flow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_core::input::PointerButton;
    use kiosk_core::scene::ActiveScene;

    /// App on a 90x28 grid (10px x 20px cells), already past the splash.
    fn app_on_menu() -> App {
        let mut app = App::new(&KioskConfig::default());
        app.handle_host_event(HostEvent::Resize { cols: 90, rows: 28 })
            .unwrap();
        app.director.tick(2.0, &mut app.platform).unwrap();
        assert!(matches!(app.director.active(), ActiveScene::Menu(_)));
        app
    }

    fn click(column: u16, row: u16) -> HostEvent {
        HostEvent::Pointer {
            column,
            row,
            kind: PointerKind::Down(PointerButton::Primary),
        }
    }

    #[test]
    fn quit_key_ends_loop() {
        let mut app = App::new(&KioskConfig::default());
        assert_eq!(app.handle_host_event(HostEvent::Quit).unwrap(), Flow::Exit);
    }

    #[test]
    fn cell_clicks_reach_cards_through_viewport() {
        let mut app = app_on_menu();
        assert_eq!(app.handle_host_event(click(47, 14)).unwrap(), Flow::Continue);
        match app.director.active() {
            ActiveScene::Detail(detail) => assert_eq!(detail.entry_index(), 1),
            other => panic!("expected detail, got {}", other.label()),
        }
    }

    #[test]
    fn exit_button_stops_the_kiosk() {
        let mut app = app_on_menu();
        assert_eq!(app.handle_host_event(click(70, 24)).unwrap(), Flow::Exit);
        assert!(app.platform.exit_requested());
    }

    #[test]
    fn hover_uses_current_viewport() {
        let mut app = app_on_menu();
        app.handle_host_event(HostEvent::Pointer {
            column: 70,
            row: 24,
            kind: PointerKind::Moved,
        })
        .unwrap();
        match app.director.active() {
            ActiveScene::Menu(menu) => assert!(menu.exit_button().is_hovered()),
            other => panic!("expected menu, got {}", other.label()),
        }
    }

    #[test]
    fn menu_renders_into_terminal_buffer() {
        let app = app_on_menu();
        let backend = ratatui::backend::TestBackend::new(90, 28);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let mut surface = TerminalSurface::new(frame.buffer_mut(), app.canvas);
                app.director.render(&mut surface);
            })
            .unwrap();

        let buf = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        for needle in ["Choose an option to explore", "ITAM", "TEC", "Anahuac", "About", "Exit"] {
            assert!(text.contains(needle), "missing {needle}:\n{text}");
        }
    }
}
