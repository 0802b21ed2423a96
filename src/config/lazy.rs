/// A field that is resolved on first read and cached afterwards.
///
/// Replaces "is the key in the state map yet" checks with an explicit state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lazy<T> {
    Unset,
    Cached(T),
}

impl<T> Default for Lazy<T> {
    fn default() -> Self {
        Lazy::Unset
    }
}

impl<T> Lazy<T> {
    pub fn is_cached(&self) -> bool {
        matches!(self, Lazy::Cached(_))
    }

    /// The cached value, without resolving.
    pub fn get(&self) -> Option<&T> {
        match self {
            Lazy::Unset => None,
            Lazy::Cached(value) => Some(value),
        }
    }

    pub fn get_or_resolve<F>(&mut self, resolve: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if let Lazy::Unset = self {
            *self = Lazy::Cached(resolve());
        }
        match self {
            Lazy::Cached(value) => value,
            Lazy::Unset => unreachable!("lazy field resolved above"),
        }
    }

    /// Like [`get_or_resolve`](Self::get_or_resolve), but a failed resolver
    /// leaves the field unset so the next read tries again.
    pub fn get_or_try_resolve<F, E>(&mut self, resolve: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Lazy::Unset = self {
            *self = Lazy::Cached(resolve()?);
        }
        match self {
            Lazy::Cached(value) => Ok(value),
            Lazy::Unset => unreachable!("lazy field resolved above"),
        }
    }

    /// Explicit override; replaces whatever was cached.
    pub fn set(&mut self, value: T) -> &mut T {
        *self = Lazy::Cached(value);
        match self {
            Lazy::Cached(value) => value,
            Lazy::Unset => unreachable!("lazy field set above"),
        }
    }

    pub fn reset(&mut self) -> Option<T> {
        match std::mem::replace(self, Lazy::Unset) {
            Lazy::Cached(value) => Some(value),
            Lazy::Unset => None,
        }
    }
}
