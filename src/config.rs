use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONF_FILE_EXTENSION: &str = "screenlight";

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
#[serde(default)]
pub struct Config {
    pub window: Window,
    pub overlay: Overlay,
    pub mover: Mover,
    pub power: Power,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Window {
    pub monitor_index: usize,
    pub always_on_top: bool,
    pub hide_cursor: bool,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            monitor_index: 0,
            always_on_top: true,
            hide_cursor: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Overlay {
    pub brightness: u8,
    pub step: u8,
    pub fine_step: u8,
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            brightness: 255,
            step: 10,
            fine_step: 1,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Mover {
    pub enabled: bool,
    pub origin: [i32; 2],
    pub velocity: [i32; 2],
    pub frame_delay_ms: u64,
}

impl Default for Mover {
    fn default() -> Self {
        Self {
            enabled: true,
            origin: [100, 100],
            velocity: [2, 2],
            frame_delay_ms: 5,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Power {
    pub inhibit_sleep: bool,
}

impl Default for Power {
    fn default() -> Self {
        Self {
            inhibit_sleep: true,
        }
    }
}

pub fn get_config(path: &Path) -> Result<Config> {
    let config_data = &fs::read_to_string(path)?;
    let config: Config = toml::from_str(config_data)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_behavior() {
        let conf = Config::default();
        assert_eq!(conf.overlay.brightness, 255);
        assert_eq!(conf.overlay.step, 10);
        assert_eq!(conf.overlay.fine_step, 1);
        assert_eq!(conf.mover.origin, [100, 100]);
        assert_eq!(conf.mover.velocity, [2, 2]);
        assert_eq!(conf.mover.frame_delay_ms, 5);
        assert!(conf.mover.enabled);
        assert!(conf.power.inhibit_sleep);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let conf: Config = toml::from_str(
            r#"
            [overlay]
            brightness = 40

            [mover]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(conf.overlay.brightness, 40);
        assert_eq!(conf.overlay.step, 10);
        assert!(!conf.mover.enabled);
        assert_eq!(conf.mover.velocity, [2, 2]);
        assert!(conf.window.always_on_top);
    }

    #[test]
    fn out_of_range_brightness_is_rejected() {
        let res: Result<Config, _> = toml::from_str("[overlay]\nbrightness = 300\n");
        assert!(res.is_err());
    }

    #[test]
    fn reads_config_from_file() {
        let path = std::env::temp_dir().join(format!(
            "screenlight-config-{}.{}",
            std::process::id(),
            CONF_FILE_EXTENSION
        ));
        fs::write(&path, "[power]\ninhibit_sleep = false\n").unwrap();

        let conf = get_config(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(!conf.power.inhibit_sleep);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(get_config(Path::new("/nonexistent/screenlight.screenlight")).is_err());
    }
}
