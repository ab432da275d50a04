mod metadata;
mod observer;
mod sysfs;

pub use metadata::ConnectionMetadata;
pub use observer::observe;
pub use sysfs::SysfsConnectionMetadata;
