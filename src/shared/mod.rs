pub mod errors;
pub mod shutdown;

pub use errors::{DomainError, InfraError};
pub use shutdown::{ShutdownCoordinator, ShutdownSignal};
