mod answer;
mod common;
mod delete_history;
mod question;
mod user;

pub use self::{answer::*, common::*, delete_history::*, question::*, user::*};
