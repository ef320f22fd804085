// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in geometry calculations
#![allow(clippy::cast_sign_loss)] // f32->u32 where the value is known non-negative

//! EV Dashboard Simulator.
//!
//! Round-dial instrument cluster for an electric motorcycle, rendered with
//! `embedded-graphics` into an SDL2 simulator window:
//! - Left semicircular gauge: motor current (`[A]`)
//! - Right semicircular gauge: motor speed (`[rpm]`)
//! - Central state-of-charge readout with `%` and model caption
//! - Motor / battery temperature rows
//! - Icon row: left blinker, drive-mode / warning glyph, right blinker
//! - Charging page: full-circle progress ring replacing the gauges
//!
//! # Architecture
//!
//! Rendering is split into a pure core and a thin executor:
//!
//! ```text
//! DashboardState ──▶ render_frame() ──▶ Frame (Vec<DrawCmd>) ──▶ draw_frame() ──▶ display
//!       ▲                  ▲
//!  BlinkController    DashboardConfig
//! ```
//!
//! [`render::render_frame`] never touches a display; it emits an ordered
//! draw-command list that [`surface::draw_frame`] replays. State mutation
//! raises a redraw flag and the main loop renders only when the flag is
//! set, so an idle dashboard costs nothing.
//!
//! # Controls (Simulator Mode)
//!
//! | Key | Action |
//! |-----|--------|
//! | `C` | Toggle charging page |
//! | `W` | Toggle warning glyph |
//! | `D` | Toggle drive mode (D / R) |
//! | `L` | Toggle left blinker |
//! | `R` | Toggle right blinker |
//! | `M` | Toggle middle status icon |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.

mod blink;
mod colors;
mod config;
mod geometry;
mod render;
mod state;
mod styles;
mod surface;

use std::thread;
use std::time::{Duration, Instant};

use blink::{BLINK_PERIOD, BlinkController};
use config::DashboardConfig;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use render::render_frame;
use state::{DashboardState, DriveMode, Side};
use surface::draw_frame;

/// Demo value-generator period (the instrument's nominal data rate).
const VALUE_PERIOD: Duration = Duration::from_millis(100);

/// Period of the automatic normal/charging page flip in demo mode.
const CHARGE_TOGGLE_PERIOD: Duration = Duration::from_secs(10);

/// Event-loop pacing (~50 FPS ceiling; idle frames skip rendering anyway).
const FRAME_TIME: Duration = Duration::from_millis(20);

fn main() {
    let config = DashboardConfig::default();

    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(config.window_size);
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new("MZ 200e Dashboard", &output_settings);

    // ==========================================================================
    // Initial State
    // ==========================================================================

    let mut state = DashboardState::new();
    let mut blink = BlinkController::new();

    // Demo scenario: both gauges past the 70-unit ceiling (the value arcs
    // visibly overrun the track), charge at 60%, blinkers running.
    state.set_left_value(80.0);
    state.set_right_value(80.0);
    state.set_center_value(60.0);
    state.set_temp_values(61.0, 48.0);
    state.set_middle_icon_visible(true);
    state.set_blinker_enabled(Side::Left, true);
    state.set_blinker_enabled(Side::Right, true);

    // Demo signal ramps, advanced on the value timer.
    let mut charge = 60.0f32;
    let mut gauge_ramp = 80.0f32;

    let mut last_values = Instant::now();
    let mut last_blink = Instant::now();
    let mut last_charge_toggle = Instant::now();

    // First frame up front; the window must be updated before polling events.
    state.take_redraw();
    let frame = render_frame(&state, &config, display.size());
    draw_frame(&mut display, &frame).ok();
    window.update(&display);

    // ==========================================================================
    // Main Loop
    // ==========================================================================

    'running: loop {
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam when holding keys
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::C => state.set_charging_mode(!state.charging_mode()),
                        Keycode::W => state.set_warning_state(!state.warning_state()),
                        Keycode::D => {
                            let next = match state.drive_mode() {
                                DriveMode::Driving => DriveMode::Reverse,
                                DriveMode::Reverse => DriveMode::Driving,
                            };
                            state.set_drive_mode(next);
                        }
                        Keycode::L => {
                            state.set_blinker_enabled(Side::Left, !state.blinker_enabled(Side::Left));
                        }
                        Keycode::R => {
                            state.set_blinker_enabled(Side::Right, !state.blinker_enabled(Side::Right));
                        }
                        Keycode::M => state.set_middle_icon_visible(!state.icon2_visible()),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // ======================================================================
        // Demo Signal Generation
        // ======================================================================

        if last_values.elapsed() >= VALUE_PERIOD {
            charge += 1.0;
            if charge > 100.0 {
                charge = 0.0;
            }
            // Ramp past the ceiling so the overrun behavior stays visible.
            gauge_ramp += 1.0;
            if gauge_ramp > 80.0 {
                gauge_ramp = 0.0;
            }

            state.set_center_value(charge);
            state.set_left_value(gauge_ramp);
            state.set_right_value(gauge_ramp);
            state.set_temp_values(40.0 + charge / 4.0, 30.0 + charge / 5.0);
            last_values = Instant::now();
        }

        // Blinker machine: exactly one step per elapsed period.
        if last_blink.elapsed() >= BLINK_PERIOD {
            blink.tick(&mut state);
            last_blink = Instant::now();
        }

        // Demo page flip between normal and charging.
        if last_charge_toggle.elapsed() >= CHARGE_TOGGLE_PERIOD {
            state.set_charging_mode(!state.charging_mode());
            last_charge_toggle = Instant::now();
        }

        // ======================================================================
        // Render (only when something changed)
        // ======================================================================

        if state.take_redraw() {
            let frame = render_frame(&state, &config, display.size());
            draw_frame(&mut display, &frame).ok();
            window.update(&display);
        }

        thread::sleep(FRAME_TIME);
    }
}
