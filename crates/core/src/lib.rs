mod backup;
mod copier;
mod error;
mod file_ops;
mod probe;
mod replacer;
mod resolver;
#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

pub use backup::*;
pub use copier::*;
pub use error::*;
pub use file_ops::*;
pub use probe::*;
pub use replacer::*;
pub use resolver::*;
