//! Shapes supported by the queries.

pub use self::capsule::Capsule;
pub use self::disc::Disc;
pub use self::error::ShapeError;
pub use self::rect::Rect;
#[doc(inline)]
pub use self::shape::{Shape, ShapeType};
#[doc(inline)]
pub use self::support_chain::{LocalChain, SupportChain, MAX_SUPPORT_CHAIN_LEN};

mod capsule;
mod disc;
mod error;
mod rect;
mod shape;
mod support_chain;
