//! Command implementations

mod practices;
mod scan;

pub use practices::practices;
pub use scan::scan;
