//! once-settled memo cells for derived record fields
//!
//! A [`Memo`] starts out unresolved and is settled at most once, on first access. After that the
//! value never changes for the lifetime of the owning record. Settlement goes through
//! [`once_cell::sync::OnceCell`], so concurrent first accesses on a shared record block on each
//! other instead of racing.
use {
    once_cell::sync::OnceCell,
    std::fmt::{self, Debug},
};

/// a lazily settled, memoized value
pub struct Memo<T> {
    /// the underlying cell
    cell: OnceCell<T>,
}

impl<T> Memo<T> {
    /// make a new unresolved memo
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// get the settled value, if any
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// whether the memo has been settled
    pub fn is_settled(&self) -> bool {
        self.cell.get().is_some()
    }

    /// get the value, settling it with `init` on first access
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(init)
    }

    /// get the value, trying to settle it with `init` on first access
    ///
    /// if `init` fails the error is handed back and the memo stays unresolved, so the next access
    /// runs `init` again
    pub fn get_or_try_init<F, E>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.cell.get_or_try_init(init)
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Memo<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

// settled state isn't part of a record's value
impl<T> PartialEq for Memo<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T: Debug> Debug for Memo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(v) => f.debug_tuple("Memo").field(v).finish(),
            None => f.write_str("Memo(<unresolved>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::cell::Cell};

    #[test]
    fn test_settles_once() {
        let calls = Cell::new(0);
        let memo = Memo::new();

        assert!(!memo.is_settled());
        assert_eq!(
            *memo.get_or_init(|| {
                calls.set(calls.get() + 1);
                7
            }),
            7
        );
        assert_eq!(
            *memo.get_or_init(|| {
                calls.set(calls.get() + 1);
                8
            }),
            7
        );
        assert_eq!(calls.get(), 1);
        assert!(memo.is_settled());
    }

    #[test]
    fn test_failed_init_is_not_cached() {
        let memo: Memo<u32> = Memo::new();

        assert_eq!(memo.get_or_try_init(|| Err::<u32, _>("down")), Err("down"));
        assert!(!memo.is_settled());
        assert_eq!(memo.get_or_try_init(|| Ok::<_, &str>(3)), Ok(&3));
        assert_eq!(memo.get_or_try_init(|| Err::<u32, _>("down")), Ok(&3));
    }

    #[test]
    fn test_equality_ignores_state() {
        let a: Memo<u8> = Memo::new();
        let b: Memo<u8> = Memo::new();
        b.get_or_init(|| 1);

        assert_eq!(a, b);
        assert_eq!(format!("{:?}", a), "Memo(<unresolved>)");
        assert_eq!(format!("{:?}", b), "Memo(1)");
    }
}
