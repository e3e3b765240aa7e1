use crate::CustomEvent;
use anyhow::{anyhow, Result};
use std::sync::Mutex;
use windows::core::HSTRING;
use windows::Win32::{
    Foundation::{BOOL, FALSE, HWND, TRUE},
    System::{
        Console::{
            AllocConsole, SetConsoleCtrlHandler, CTRL_BREAK_EVENT, CTRL_CLOSE_EVENT, CTRL_C_EVENT,
        },
        Power::{
            SetThreadExecutionState, ES_CONTINUOUS, ES_DISPLAY_REQUIRED, ES_SYSTEM_REQUIRED,
        },
    },
    UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK},
};
use winit::event_loop::EventLoopProxy;

static SHUTDOWN_PROXY: Mutex<Option<EventLoopProxy<CustomEvent>>> = Mutex::new(None);

/// Keep the display and system awake until `allow_sleep` is called.
pub fn stop_screensaver() -> bool {
    let previous = unsafe {
        SetThreadExecutionState(ES_CONTINUOUS | ES_SYSTEM_REQUIRED | ES_DISPLAY_REQUIRED)
    };
    previous.0 != 0
}

pub fn allow_sleep() {
    unsafe {
        let _execution_state = SetThreadExecutionState(ES_CONTINUOUS);
    }
}

/// GUI subsystem processes start without a console.
pub fn alloc_console() -> Result<()> {
    unsafe { AllocConsole() }.ok()?;
    Ok(())
}

pub fn set_ctrl_handler(proxy: EventLoopProxy<CustomEvent>) -> Result<()> {
    *SHUTDOWN_PROXY
        .lock()
        .map_err(|_| anyhow!("shutdown proxy lock poisoned"))? = Some(proxy);
    unsafe { SetConsoleCtrlHandler(Some(console_handler), TRUE) }.ok()?;
    Ok(())
}

unsafe extern "system" fn console_handler(ctrl_type: u32) -> BOOL {
    match ctrl_type {
        CTRL_C_EVENT | CTRL_BREAK_EVENT | CTRL_CLOSE_EVENT => {
            log::info!("Shutdown signal received. Shutting down gracefully.");
            if let Ok(guard) = SHUTDOWN_PROXY.lock() {
                if let Some(proxy) = guard.as_ref() {
                    let _ = proxy.send_event(CustomEvent::Shutdown);
                }
            }
            TRUE
        }
        _ => FALSE,
    }
}

pub fn message_box_error(title: &str, message: &str) {
    unsafe {
        MessageBoxW(
            HWND::default(),
            &HSTRING::from(message),
            &HSTRING::from(title),
            MB_OK | MB_ICONERROR,
        );
    }
}
