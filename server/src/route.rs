mod question;
mod user;

pub use self::{question::*, user::*};
