mod absolute;
mod copy;
mod current_exe;
mod exists;
mod extract;
mod replace;
mod update;
mod writable;

pub use absolute::*;
pub use copy::*;
pub use current_exe::*;
pub use exists::*;
pub use extract::*;
pub use replace::*;
pub use update::*;
pub use writable::*;
