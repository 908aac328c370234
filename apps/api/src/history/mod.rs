// Local history of saved recommendations.
// The whole list lives in memory and is mirrored to a backend after every mutation.

pub mod backend;
pub mod handlers;
pub mod store;
