/*!
 * Process Module
 * Process model, input validation and the caller-owned process table
 */

pub mod table;
pub mod types;
pub mod validation;

pub use table::{PidSequence, ProcessTable};
pub use types::Process;
pub use validation::{normalize_priority, parse_priority, parse_time_field, validate_process_set};
