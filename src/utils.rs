#[cfg(windows)]
use crate::common_win32;

use crate::args::Args;
use crate::config::CONF_FILE_EXTENSION;
use crate::CustomEvent;
use anyhow::Result;
use std::path::PathBuf;
use winit::event_loop::EventLoopProxy;

/// Holds the power-management request for as long as it lives.
#[derive(Debug)]
pub struct SleepInhibitor(());

impl SleepInhibitor {
    #[cfg(windows)]
    pub fn acquire() -> Option<Self> {
        if common_win32::stop_screensaver() {
            log::info!("Sleep and display power-off inhibited");
            Some(Self(()))
        } else {
            log::warn!("SetThreadExecutionState failed");
            None
        }
    }

    #[cfg(not(windows))]
    pub fn acquire() -> Option<Self> {
        log::warn!("'inhibit_sleep' option not supported");
        None
    }
}

impl Drop for SleepInhibitor {
    fn drop(&mut self) {
        #[cfg(windows)]
        common_win32::allow_sleep();

        log::info!("Sleep inhibition released");
    }
}

/// Make stdout visible for `--verbose`.
pub fn attach_console() -> Result<()> {
    #[cfg(windows)]
    common_win32::alloc_console()?;

    Ok(())
}

/// Route Ctrl+C / Ctrl+Break / console close into the event loop.
pub fn install_ctrl_handler(proxy: EventLoopProxy<CustomEvent>) -> Result<()> {
    #[cfg(windows)]
    common_win32::set_ctrl_handler(proxy)?;

    #[cfg(not(windows))]
    {
        let _ = proxy;
        log::debug!("console control handler not installed on this platform");
    }

    Ok(())
}

/// Blocking error report for startup failures.
pub fn show_error(title: &str, message: &str) {
    eprintln!("{}: {}", title, message);

    #[cfg(windows)]
    common_win32::message_box_error(title, message);
}

/// Return "yes" if true, "no" otherwise
pub fn yes_no(yes: bool) -> &'static str {
    if yes {
        "yes"
    } else {
        "no"
    }
}

/// Get the config file path
pub fn get_config_file_path(args: &Args) -> Option<PathBuf> {
    // From args
    for arg_conf_path in &args.config_paths {
        if arg_conf_path.is_file() {
            return Some(arg_conf_path.clone());
        }
        log::warn!("config file not found: {}", arg_conf_path.display());
    }

    // From home dir ('~/.screenlight')
    if let Some(home_dir) = dirs::home_dir() {
        let user_conf_path = home_dir.join(format!(".{}", CONF_FILE_EXTENSION));
        if user_conf_path.is_file() {
            return Some(user_conf_path);
        }
    }

    None
}
