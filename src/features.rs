//! Feature modules - logic separated from UI
//!
//! Features should not depend on UI components directly, apart from the
//! plain data types they persist.

pub mod session;
pub mod settings;

pub use session::ScreenState;
pub use settings::Settings;
