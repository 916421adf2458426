use std::marker::PhantomData;

/// Soft-delete state of an entity. Only ever moves from active to deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsDeleted<T>(bool, PhantomData<T>);

impl<T> IsDeleted<T> {
    pub fn new(value: impl Into<bool>) -> Self {
        IsDeleted(value.into(), PhantomData)
    }

    pub fn active() -> Self {
        Self::new(false)
    }

    pub fn is_deleted(&self) -> bool {
        self.0
    }

    pub(crate) fn mark(&mut self) {
        self.0 = true;
    }
}

impl<T> Default for IsDeleted<T> {
    fn default() -> Self {
        Self::active()
    }
}

impl<T> AsRef<bool> for IsDeleted<T> {
    fn as_ref(&self) -> &bool {
        &self.0
    }
}

impl<T> From<IsDeleted<T>> for bool {
    fn from(value: IsDeleted<T>) -> Self {
        value.0
    }
}
