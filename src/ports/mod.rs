//! Capability interfaces between agents and the drivers that run them

pub mod observer;
pub mod policy;

pub use observer::EpisodeObserver;
pub use policy::Policy;
