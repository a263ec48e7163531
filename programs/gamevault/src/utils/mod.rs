pub mod draw;
pub mod fees;
pub mod scoring;
pub mod transfers;

pub use draw::*;
pub use fees::*;
pub use scoring::*;
