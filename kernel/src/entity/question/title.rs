use error_stack::Report;
use serde::Serialize;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Fromln, AsRefln)]
pub struct QuestionTitle(String);

impl QuestionTitle {
    /// Measured in UTF-16 code units.
    pub const MAX_LENGTH: usize = 100;

    pub fn new(title: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let title = title.into();
        let length = title.encode_utf16().count();
        if length > Self::MAX_LENGTH {
            return Err(Report::new(KernelError::Validation).attach_printable(format!(
                "`title` is {length} units long, at most {} allowed",
                Self::MAX_LENGTH
            )));
        }
        Ok(Self(title))
    }
}

#[cfg(test)]
mod test {
    use rand::distributions::Uniform;
    use rand::Rng;

    use super::QuestionTitle;
    use crate::KernelError;

    #[test]
    fn accepts_title_at_limit() {
        let title = "a".repeat(QuestionTitle::MAX_LENGTH);
        assert!(QuestionTitle::new(title).is_ok());
    }

    #[test]
    fn rejects_random_overlong_title() {
        let title = rand::thread_rng()
            .sample_iter(Uniform::new_inclusive(b'a', b'z'))
            .take(200)
            .map(char::from)
            .collect::<String>();
        let report = QuestionTitle::new(title).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Validation);
    }

    #[test]
    fn counts_utf16_units_not_bytes() {
        // 3 bytes in UTF-8, 1 unit in UTF-16
        assert!(QuestionTitle::new("가".repeat(100)).is_ok());
        // surrogate pair: 2 units each
        assert!(QuestionTitle::new("😀".repeat(51)).is_err());
    }
}
