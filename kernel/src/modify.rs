mod answer;
mod delete_history;
mod question;
mod user;

pub use self::{answer::*, delete_history::*, question::*, user::*};
