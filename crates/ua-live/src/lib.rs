// Live spinner driver, frame layout and terminal control for unispin.

pub mod driver;
pub mod render;
pub mod term;

pub use driver::{LiveOptions, LiveSpinner, SpinnerSource, live_spinner};
pub use render::{PreviewLayout, format_frame};
