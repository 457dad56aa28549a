#![forbid(unsafe_code)]

//! Widgets for Backpack components.
//!
//! Widgets build [`Node`](node::Node) trees. Interactive nodes carry
//! messages instead of callbacks; the owning component handles them in its
//! own `update` step.

pub mod button;
pub mod mount;
pub mod node;
pub mod popover;
pub mod scrim;

pub use button::{Button, ButtonVariant};
pub use mount::{Lifecycle, Mounted};
pub use node::{ElementNode, EventKind, Node, PortalNode};
pub use popover::Popover;
pub use scrim::{Scrim, ScrimGuard};
