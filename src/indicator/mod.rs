//! The dot-cycle animation: counter, options, controller, and the binding
//! registry that keeps one controller per sink.

pub mod controller;
pub mod cycle;
pub mod options;
pub mod registry;

pub use controller::DotsController;
pub use cycle::DotCycle;
pub use options::{Directive, DotsOptions, OptionsPatch};
pub use registry::Indicators;
