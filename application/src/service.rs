use error_stack::Report;
use uuid::Uuid;

use kernel::KernelError;

pub use self::{answer::*, delete_history::*, question::*, user::*};

mod answer;
mod delete_history;
mod question;
mod user;

fn not_found(entity: &'static str, id: &Uuid) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("{entity} {id} does not exist"))
}
