use crate::domain::ConnectionInfo;
use std::fmt::Debug;

/// The platform seam for connection metadata. `None` means the platform
/// exposes no such capability.
pub trait ConnectionMetadata: Debug + Send + Sync {
    fn read(&self) -> Option<ConnectionInfo>;
}
