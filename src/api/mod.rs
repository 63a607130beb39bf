pub mod hasher;
pub mod neighborhood;

pub use hasher::GeoHasher;
pub use neighborhood::Neighborhood;
