mod consts;
mod duration;
mod error;
#[cfg(feature = "serde")]
mod export;
mod settings;

pub use consts::DEFAULT_BINDING;
pub use duration::*;
pub use error::*;
pub use settings::*;
