pub mod local;
pub mod remote;
pub mod shared;
pub mod transcript;
