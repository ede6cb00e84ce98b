pub mod profile;
pub mod restriction;

pub use profile::{Profile, ProfileView};
pub use restriction::{Restriction, RestrictionKind, RestrictionSource};
