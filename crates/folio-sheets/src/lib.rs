pub mod client;
pub mod error;
pub mod traits;

pub use client::MacroSheetClient;
pub use error::SheetError;
pub use traits::SheetClient;
