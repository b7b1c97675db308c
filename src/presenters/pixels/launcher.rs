use std::time::{Duration, Instant};

use log::{debug, error, info};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::WindowBuilder;

use crate::controllers::interactive::{InteractiveController, TickOutcome};
use crate::input::commands::ports::DisplayLauncherPort;
use crate::input::gui::KeyboardState;
use crate::presenters::pixels::errors::DisplayError;
use crate::presenters::pixels::presenter::PixelsPresenter;

pub const WINDOW_TITLE: &str = "Fractol";
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Runs the controller inside a fixed-size winit window backed by a pixels
/// surface.
pub struct PixelsDisplayLauncher {
    title: String,
    tick_interval: Duration,
}

impl Default for PixelsDisplayLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelsDisplayLauncher {
    pub fn new() -> Self {
        Self {
            title: WINDOW_TITLE.to_owned(),
            tick_interval: TICK_INTERVAL,
        }
    }
}

impl DisplayLauncherPort for PixelsDisplayLauncher {
    type Failure = DisplayError;

    fn launch(&self, mut controller: InteractiveController) -> Result<(), DisplayError> {
        let width = controller.buffer().width();
        let height = controller.buffer().height();

        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(self.title.as_str())
            .with_inner_size(PhysicalSize::new(width, height))
            .with_resizable(false)
            .build(&event_loop)?;

        let mut presenter = PixelsPresenter::new(&window, width, height)?;
        presenter.draw(controller.buffer())?;
        window.request_redraw();

        let mut keyboard = KeyboardState::default();
        let mut failure: Option<DisplayError> = None;
        let mut next_tick = Instant::now();

        info!("opened {width}x{height} window '{}'", self.title);

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::KeyboardInput { event, .. } => {
                    if let PhysicalKey::Code(key_code) = event.physical_key {
                        keyboard.handle_key_event(key_code, event.state);
                    }
                }
                WindowEvent::Focused(false) => keyboard.reset(),
                WindowEvent::RedrawRequested => {
                    if let Err(err) = presenter.render() {
                        error!("render error: {err}");
                        failure = Some(err);
                        elwt.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                let now = Instant::now();

                if now >= next_tick {
                    next_tick = now + self.tick_interval;

                    match controller.tick(&keyboard) {
                        TickOutcome::CloseRequested => elwt.exit(),
                        TickOutcome::Rendered => match presenter.draw(controller.buffer()) {
                            Ok(()) => window.request_redraw(),
                            Err(err) => {
                                error!("present error: {err}");
                                failure = Some(err);
                                elwt.exit();
                            }
                        },
                        TickOutcome::Idle => {}
                    }
                }

                elwt.set_control_flow(ControlFlow::WaitUntil(next_tick));
            }
            _ => {}
        })?;

        debug!("event loop finished after {} renders", controller.render_count());

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
