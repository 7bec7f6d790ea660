// System Layer
pub mod filesystem;
pub mod host;
pub mod routines;
pub mod search;
pub mod service;

pub use filesystem::{DeleteMode, FileSystem};
pub use host::HostApi;
pub use routines::{run_routine, RoutineStore};
pub use service::LocalFileService;
