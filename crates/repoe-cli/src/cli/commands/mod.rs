//! CLI command handlers, one file per command.

mod copy;
mod list;
mod status;
mod sync;

pub use copy::run_copy;
pub use list::run_list;
pub use status::run_status;
pub use sync::run_sync;
