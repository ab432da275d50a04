use std::fmt;

/// Connection metadata as exposed by the platform, mirroring what the
/// network-information capability reports where available.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConnectionInfo {
    pub connection_type: String,
    pub effective_type: String,
    pub save_data: bool,
}

impl fmt::Display for ConnectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type: {}, Effective: {}, Save-Data: {}",
            self.connection_type,
            self.effective_type,
            if self.save_data { "On" } else { "Off" }
        )
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ConnectionStatus {
    /// Not probed yet.
    #[default]
    Unknown,
    /// The platform exposes no connection metadata.
    Unavailable,
    Available(ConnectionInfo),
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStatus::Unknown => Ok(()),
            ConnectionStatus::Unavailable => write!(f, "Network info unavailable"),
            ConnectionStatus::Available(info) => info.fmt(f),
        }
    }
}
