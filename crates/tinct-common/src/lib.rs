pub mod location;

pub use location::{ImmLoc, Location, RegLoc};
