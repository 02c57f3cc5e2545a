//! Response body rendering.
//!
//! # Data Flow
//! ```text
//! Clock + Chooser
//!     → facts.rs (DynamicFacts, sampled once)
//! RequestContext + DynamicFacts + PageConfig
//!     → page.rs PageModel::build (escape untrusted values)
//!     → page.rs PageModel::render (fill the template)
//!     → HTML body
//! ```

pub mod facts;
pub mod page;

pub use facts::{Chooser, Clock, Color, DynamicFacts, SystemClock, ThreadRngChooser};
pub use page::PageModel;
