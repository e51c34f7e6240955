pub mod analysis;
pub mod mode;
pub mod qr_code;

pub use analysis::Analysis;
pub use mode::Mode;
pub use qr_code::{ECLevel, Version};
