pub mod board;
pub mod ident;
pub mod matches;
pub mod player;
pub mod throws;

pub use board::*;
pub use ident::*;
pub use matches::*;
pub use player::*;
pub use throws::*;
