mod result;
pub mod shadow_erasure;

pub use result::*;
pub use shadow_erasure::*;
