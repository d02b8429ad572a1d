pub mod edge;
pub use edge::*;

pub mod game;
pub use game::*;

pub mod info;
pub use info::*;

pub mod memory;
pub use memory::*;

pub mod path;
pub use path::*;

pub mod policy;
pub use policy::*;

pub mod profile;
pub use profile::*;

pub mod solver;
pub use solver::*;

pub mod turn;
pub use turn::*;
