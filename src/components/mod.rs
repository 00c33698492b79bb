pub mod body;
pub mod trail;

pub use body::{Body, BodyId};
pub use trail::{DEFAULT_ORBIT_HISTORY_CAPACITY, OrbitHistory};
