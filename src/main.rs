//! Interactive force and velocity vector visualizer.
//!
//! Opens a window with both vectors drawn from the canvas center. Tab and
//! Shift+Tab pick the field to edit, Up/Down nudge it (hold Shift for steps of
//! 10), and 1-4 load the example cases. Run with `--debug` to render a single
//! frame headlessly into the log instead.

use log::{error, info, warn};
use rvector::controls::{Controls, Preset};
use rvector::explanations;
use rvector::recorder::Recorder;
use rvector::renderer::{CanvasFrame, VectorRenderer};
use std::env;
use std::error::Error;

/// Window title prefix, followed by the current values
#[cfg(feature = "gui")]
const TITLE: &str = "Force & Velocity Vectors";
/// Width of the canvas in pixels
const WINDOW_WIDTH: u32 = 300;
/// Height of the canvas in pixels
const WINDOW_HEIGHT: u32 = 300;
/// Path to the font file used for axis captions and vector labels
#[cfg(feature = "gui")]
const FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";
const LOG_FILE: &str = "rvector.log";

/// Parses the `idx`th debug argument, keeping `default` when it is absent or
/// not a number.
fn debug_value(args: &[String], idx: usize, default: f64) -> f64 {
    let Some(arg) = args.get(idx) else {
        return default;
    };
    match arg.parse::<f64>() {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring debug argument {:?} ({}); using {}", arg, e, default);
            default
        }
    }
}

/// Renders one frame into a [`Recorder`] and writes the draw calls to the log.
///
/// Optional arguments override force magnitude, force direction, velocity
/// magnitude and velocity direction, in that order.
fn run_debug(args: &[String]) -> Result<(), Box<dyn Error>> {
    let defaults = Controls::default();
    let value = |idx: usize, default: f64| debug_value(args, idx, default);
    let controls = Controls::from_preset(Preset {
        force: (value(0, defaults.force.0), value(1, defaults.force.1)),
        velocity: (value(2, defaults.velocity.0), value(3, defaults.velocity.1)),
    });
    info!("Debug frame: {}", controls.summary());

    let mut recorder = Recorder::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let origin = CanvasFrame::new(WINDOW_WIDTH, WINDOW_HEIGHT).center();
    VectorRenderer::default().render_frame(&mut recorder, origin, &controls.vectors())?;
    recorder.print_to_log();
    println!("Recorded {} draw calls to {}", recorder.commands.len(), LOG_FILE);
    Ok(())
}

#[cfg(feature = "gui")]
mod window {
    use super::*;
    use log::warn;
    use rvector::controls::Command;
    use rvector::error::RenderError;
    use rvector::explanations::EXAMPLES;
    use rvector::sdl_surface::{Fonts, SdlSurface};
    use rvector::surface::Surface;
    use sdl2::event::{Event, WindowEvent};
    use sdl2::keyboard::{Keycode, Mod};
    use sdl2::render::Canvas;
    use sdl2::video::Window;

    fn to_command(key: Keycode, keymod: Mod) -> Option<Command> {
        let coarse = keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD);
        let preset = |idx: usize| Some(Command::Apply(EXAMPLES[idx].preset));
        match key {
            Keycode::Tab if coarse => Some(Command::PreviousField),
            Keycode::Tab => Some(Command::NextField),
            Keycode::Up | Keycode::Right => Some(Command::Increase { coarse }),
            Keycode::Down | Keycode::Left => Some(Command::Decrease { coarse }),
            Keycode::Num1 => preset(0),
            Keycode::Num2 => preset(1),
            Keycode::Num3 => preset(2),
            Keycode::Num4 => preset(3),
            _ => None,
        }
    }

    fn set_title(canvas: &mut Canvas<Window>, controls: &Controls) {
        let title = format!("{} | {}", TITLE, controls.summary());
        if let Err(e) = canvas.window_mut().set_title(&title) {
            warn!("Could not set window title: {}", e);
        }
    }

    /// Clears and repaints the whole canvas from the current control values.
    fn redraw(
        canvas: &mut Canvas<Window>,
        fonts: &Fonts,
        renderer: &VectorRenderer,
        controls: &Controls,
    ) -> Result<(), RenderError> {
        {
            let mut surface = SdlSurface::new(canvas, fonts);
            let (width, height) = surface.dimensions().ok_or(RenderError::MissingSurface)?;
            let origin = CanvasFrame::new(width, height).center();
            renderer.render_frame(&mut surface, origin, &controls.vectors())?;
        }
        set_title(canvas, controls);
        canvas.present();
        Ok(())
    }

    pub fn run() -> Result<(), Box<dyn Error>> {
        // Initialize SDL2 subsystems
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let ttf_context = sdl2::ttf::init()?;

        let window = video_subsystem
            .window(TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().build().map_err(|e| {
            error!("Failed to get a rendering context: {}", e);
            RenderError::MissingSurface
        })?;
        let fonts = Fonts::load(&ttf_context, FONT_PATH)?;

        let renderer = VectorRenderer::default();
        let mut controls = Controls::default();
        let mut event_pump = sdl_context.event_pump()?;
        redraw(&mut canvas, &fonts, &renderer, &controls)?;
        info!("Window ready: {}", controls.summary());

        // Block until the next event; every edit repaints immediately
        loop {
            let command = match event_pump.wait_event() {
                Event::Quit { .. }
                | Event::KeyDown { keycode: Some(Keycode::Escape), .. } => break,
                Event::KeyDown { keycode: Some(key), keymod, .. } => to_command(key, keymod),
                Event::Window { win_event: WindowEvent::Exposed, .. } => {
                    redraw(&mut canvas, &fonts, &renderer, &controls)?;
                    None
                }
                _ => None,
            };
            let Some(command) = command else {
                continue;
            };
            if controls.apply(command) {
                info!("Input changed: {}", controls.summary());
                redraw(&mut canvas, &fonts, &renderer, &controls)?;
            } else {
                set_title(&mut canvas, &controls);
            }
        }
        info!("Window closed.");
        Ok(())
    }
}

#[cfg(feature = "gui")]
fn run_window() -> Result<(), Box<dyn Error>> {
    window::run()
}

#[cfg(not(feature = "gui"))]
fn run_window() -> Result<(), Box<dyn Error>> {
    eprintln!("This build has no window support. Rebuild with `--features gui`, or run with --debug.");
    Err("built without the gui feature; no window available".into())
}

fn main() -> Result<(), Box<dyn Error>> {
    simple_logging::log_to_file(LOG_FILE, log::LevelFilter::Info)?;
    info!("Starting rvector.");
    println!("{}", explanations::render_text());

    let args: Vec<String> = env::args().collect();
    let result = if args.len() > 1 && args[1] == "--debug" {
        info!("Debug mode enabled.");
        run_debug(&args[2..])
    } else {
        run_window()
    };
    if let Err(e) = &result {
        error!("Exiting with error: {}", e);
    }
    result
}

#[cfg(test)]
mod test_main {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_debug_value() {
        let args = args(&["20", "abc", "-90.5"]);
        assert_eq!(debug_value(&args, 0, 50.0), 20.0);
        assert_eq!(debug_value(&args, 1, 45.0), 45.0);
        assert_eq!(debug_value(&args, 2, 0.0), -90.5);
        assert_eq!(debug_value(&args, 3, 90.0), 90.0);
    }

    #[test]
    fn test_debug_frame_renders() {
        assert!(run_debug(&args(&["0", "x"])).is_ok());
    }

    #[cfg(not(feature = "gui"))]
    #[test]
    fn test_window_without_gui_fails() {
        assert!(run_window().is_err());
    }
}
