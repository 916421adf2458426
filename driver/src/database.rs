use error_stack::Report;
use kernel::KernelError;

mod memory;
mod postgres;

pub use self::{memory::*, postgres::*};

/// Fails with [`KernelError::NotFound`] when an `UPDATE` touched no row.
pub(crate) fn ensure_affected(
    rows: u64,
    entity: &'static str,
) -> error_stack::Result<(), KernelError> {
    if rows == 0 {
        return Err(Report::new(KernelError::NotFound)
            .attach_printable(format!("No {entity} row was updated")));
    }
    Ok(())
}
