mod flag;
mod time;

pub use self::{flag::*, time::*};
