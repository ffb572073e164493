/// Types, errors and configuration shared across the unispin workspace.
///
/// Ce crate ne dépend d'aucun autre crate du workspace : le codec braille,
/// le driver live et la CLI s'appuient tous sur ses types.

pub mod color;
pub mod config;
pub mod error;
pub mod spinner;
pub mod traits;

pub use color::AnsiColor;
pub use config::PreviewConfig;
pub use error::{CoreError, DecodeError, ValidationError};
pub use spinner::{ScaleFactor, Spinner};
pub use traits::TermStream;
