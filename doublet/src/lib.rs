//! Builds configured test doubles: a declarative list of expected calls is
//! translated onto a double with cardinalities and argument constraints
//! already attached.

mod builder;
mod constraint;
mod descriptor;
mod double;
mod spec;
mod times;
mod value;

pub use builder::*;
pub use constraint::*;
pub use descriptor::*;
pub use double::*;
pub use spec::*;
pub use times::*;
pub use value::*;
