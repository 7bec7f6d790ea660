// Data Models
pub mod file_record;
pub mod filter;
pub mod operation;
pub mod routine;
pub mod session;

pub use file_record::FileRecord;
pub use filter::{FilterCriteria, FilterForm};
pub use operation::{OperationReport, OperationType};
pub use routine::{Routine, RoutineTask};
pub use session::{OpenPanel, SessionState};
