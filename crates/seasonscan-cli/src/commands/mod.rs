mod analyze;
mod batch;

pub use analyze::cmd_analyze;
pub use batch::cmd_batch;
