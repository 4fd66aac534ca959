pub mod roles;
pub mod session;
pub mod storage;

pub use roles::{Role, RoleParseError, RoleScope};
pub use session::{Session, SessionStore};
pub use storage::{KeyValueStorage, MemoryStorage, StorageError};
