use std::fmt::Display;

use error_stack::{Context, Report};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    Validation,
    CannotDelete,
    NotFound,
    Concurrency,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation => write!(f, "Invalid input"),
            KernelError::CannotDelete => write!(f, "Not permitted to delete"),
            KernelError::NotFound => write!(f, "Entity not found"),
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

/// Rejects an absent input field with [`KernelError::Validation`].
///
/// Entity constructors take plain values, so absence only exists at the input boundary.
pub trait Required<T> {
    fn required(self, field: &'static str) -> error_stack::Result<T, KernelError>;
}

impl<T> Required<T> for Option<T> {
    fn required(self, field: &'static str) -> error_stack::Result<T, KernelError> {
        self.ok_or_else(|| {
            Report::new(KernelError::Validation)
                .attach_printable(format!("`{field}` must not be null"))
        })
    }
}

#[cfg(test)]
mod test {
    use super::{KernelError, Required};

    #[test]
    fn absent_field_is_validation_error() {
        let report = None::<String>.required("title").unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Validation);
    }

    #[test]
    fn present_field_passes_through() {
        let value = Some("contents1".to_string()).required("contents").unwrap();
        assert_eq!(value, "contents1");
    }
}
