use crate::app_config::AppConfig;
use crate::connection::ConnectionMetadata;
use crate::domain::ConnectionInfo;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads connection metadata from Linux sysfs (`/sys/class/net`). The first
/// non-loopback interface that is up wins; interfaces are visited in name
/// order so the answer is stable.
#[derive(Debug)]
pub struct SysfsConnectionMetadata {
    root: PathBuf,
    save_data: bool,
}

impl SysfsConnectionMetadata {
    pub fn new(config: &AppConfig) -> Self {
        SysfsConnectionMetadata {
            root: PathBuf::from(config.connection().sysfs_root()),
            save_data: config.connection().save_data(),
        }
    }
}

impl ConnectionMetadata for SysfsConnectionMetadata {
    fn read(&self) -> Option<ConnectionInfo> {
        let mut interfaces = fs::read_dir(&self.root)
            .ok()?
            .flatten()
            .map(|entry| entry.path())
            .collect::<Vec<_>>();
        interfaces.sort();

        for interface in interfaces {
            if interface.file_name().is_some_and(|name| name == "lo") {
                continue;
            }

            if !is_up(&interface) {
                continue;
            }

            let connection_type = if interface.join("wireless").is_dir() { "wifi" } else { "ethernet" };
            let speed = fs::read_to_string(interface.join("speed"))
                .ok()
                .and_then(|s| s.trim().parse::<i64>().ok());

            return Some(ConnectionInfo {
                connection_type: connection_type.to_string(),
                effective_type: effective_type(speed).to_string(),
                save_data: self.save_data,
            });
        }

        None
    }
}

fn is_up(interface: &Path) -> bool {
    fs::read_to_string(interface.join("operstate")).is_ok_and(|state| state.trim() == "up")
}

/// Buckets a link speed in Mbit/s into the effective-type labels the
/// network-information capability uses.
fn effective_type(speed_mbit: Option<i64>) -> &'static str {
    match speed_mbit {
        Some(speed) if speed >= 10 => "4g",
        Some(speed) if speed >= 3 => "3g",
        Some(speed) if speed >= 1 => "2g",
        _ => "unknown",
    }
}
