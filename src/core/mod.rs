pub mod dates;
pub mod error;
pub mod navigation;
pub mod session;

pub use error::{AppError, ErrorKind, Result};
pub use navigation::{Navigator, Route};
pub use session::{Session, UserType};
