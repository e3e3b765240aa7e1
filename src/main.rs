#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Hide console window at Windows

mod args;
mod brightness;
mod config;
mod keys;
mod logger;
mod mover;
mod overlay;
mod utils;

#[cfg(windows)]
mod common_win32;

use crate::args::Args;
use crate::brightness::Brightness;
use crate::keys::Action;
use crate::logger::ResultLogging;
use crate::mover::MouseMover;
use crate::overlay::Overlay;
use crate::utils::*;
use anyhow::{Context, Result};
use futures::executor::block_on;
use std::time::Duration;
use winit::{
    event::{ElementState, Event, KeyboardInput, ModifiersState, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Fullscreen, WindowBuilder},
};

const APP_NAME: &str = "Screen Light";

/// Winit custom events
#[derive(Debug)]
pub enum CustomEvent {
    MoveCursor,
    Shutdown,
}

fn main() {
    let args = Args::from_env();

    // Release builds run in the GUI subsystem and have no console of their own
    if args.verbose {
        if let Err(err) = attach_console() {
            eprintln!("console allocation failed: {}", err);
        }
    }

    if let Err(err) = logger::init_logger(args.verbose) {
        eprintln!("logger init failed: {}", err);
    }
    args.log_ignored();

    if let Err(err) = run(args) {
        log::error!("{:#}", err);
        show_error("Startup Error", &format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let conf_path = get_config_file_path(&args);
    let conf = conf_path
        .as_ref()
        .and_then(|p| {
            let res = config::get_config(p);
            res.log_err();
            res.ok()
        })
        .unwrap_or_default();

    log::info!("{:#?}", conf);

    let event_loop: EventLoop<CustomEvent> = EventLoop::with_user_event();

    install_ctrl_handler(event_loop.create_proxy())
        .context("Could not set console control handler.")?;

    // Create the overlay window on the target monitor
    let monitor = event_loop
        .available_monitors()
        .nth(conf.window.monitor_index);
    if monitor.is_none() {
        log::warn!(
            "monitor {} not found, using the current one",
            conf.window.monitor_index
        );
    }
    let window = WindowBuilder::new()
        .with_title(APP_NAME)
        .with_decorations(false)
        .with_always_on_top(conf.window.always_on_top)
        .with_fullscreen(Some(Fullscreen::Borderless(monitor)))
        .build(&event_loop)
        .context("Could not create window.")?;
    window.set_cursor_visible(!conf.window.hide_cursor);

    let brightness = Brightness::new(conf.overlay.brightness);
    let mut overlay = block_on(Overlay::new(&window, brightness))
        .context("Could not create the overlay renderer.")?;
    log::info!("Brightness: {}", brightness.level());

    let mut mover = MouseMover::from_config(window.inner_size(), &conf.mover);
    let mut movement_enabled = conf.mover.enabled && !args.no_move;
    let bounds = mover.bounds();
    log::info!("Screen dimensions: {}x{}", bounds.width, bounds.height);
    log::info!(
        "Mouse movement: {} (from {:?}, velocity {:?})",
        yes_no(movement_enabled),
        mover.position(),
        mover.velocity()
    );

    let mut sleep_inhibitor = if conf.power.inhibit_sleep {
        SleepInhibitor::acquire()
    } else {
        None
    };

    // Cursor movement ticks
    let proxy = event_loop.create_proxy();
    let frame_delay = Duration::from_millis(conf.mover.frame_delay_ms.max(1));
    std::thread::spawn(move || loop {
        std::thread::sleep(frame_delay);
        // Event loop closed
        if proxy.send_event(CustomEvent::MoveCursor).is_err() {
            break;
        }
    });

    let overlay_conf = conf.overlay.clone();
    let mut modifiers_state = ModifiersState::default();

    window.request_redraw();
    log::info!("Screen light started. Press ESC to stop the program.");

    //-----------
    // Main Loop
    //-----------

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match &event {
            Event::UserEvent(event) => match event {
                CustomEvent::MoveCursor if movement_enabled => {
                    let pos = mover.step();
                    if let Err(err) = window.set_cursor_position(pos) {
                        log::error!("{}", err);
                        log::warn!("Mouse movement: {}", yes_no(false));
                        movement_enabled = false;
                    }
                }
                CustomEvent::MoveCursor => {}
                CustomEvent::Shutdown => *control_flow = ControlFlow::Exit,
            },
            Event::WindowEvent { event, window_id } if window_id == &window.id() => match event {
                WindowEvent::ModifiersChanged(newstate) => {
                    modifiers_state = *newstate;
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            virtual_keycode: Some(virtual_code),
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                } => match keys::key_action(*virtual_code, modifiers_state, &overlay_conf) {
                    Some(Action::Quit) => *control_flow = ControlFlow::Exit,
                    Some(Action::Brighter(step)) => {
                        let level = overlay.brightness.increase(step);
                        log::info!("Brightness: {}", level);
                        window.request_redraw();
                    }
                    Some(Action::Dimmer(step)) => {
                        let level = overlay.brightness.decrease(step);
                        log::info!("Brightness: {}", level);
                        window.request_redraw();
                    }
                    Some(Action::ToggleMovement) => {
                        movement_enabled = !movement_enabled;
                        log::info!("Mouse movement: {}", yes_no(movement_enabled));
                    }
                    None => {}
                },
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(physical_size) => {
                    overlay.resize(*physical_size);
                    mover.set_bounds(*physical_size);
                    window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    overlay.resize(**new_inner_size);
                    mover.set_bounds(**new_inner_size);
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                use wgpu::SwapChainError::{Lost, OutOfMemory, Outdated};
                match overlay.render() {
                    Ok(_) => {}
                    Err(Lost | Outdated) => overlay.recreate_swap_chain(),
                    Err(OutOfMemory) => *control_flow = ControlFlow::Exit,
                    Err(e) => log::error!("{:}", e),
                }
            }
            Event::LoopDestroyed => {
                window.set_cursor_visible(true);
                drop(sleep_inhibitor.take());
                log::info!("Program terminated.");
            }
            _ => (),
        }
    });
}
