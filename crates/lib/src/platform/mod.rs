pub mod arch;
pub mod os;

pub use arch::{Arch, default_arches};
pub use os::Os;
