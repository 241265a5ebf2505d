pub mod diagnostics;
pub mod page;
