//! # Resource slices
//!
//! Every backend resource the pages show is tracked by a [`Slice`]: the last
//! payload plus the `loading`/`error`/`success` flags of the operation that
//! produced it. An operation drives its slice through three transitions:
//!
//! | Transition | `loading` | `error` | `success` | `data` |
//! |------------|-----------|---------|-----------|--------|
//! | [`pending`](Slice::pending) | `true` | cleared | cleared | kept |
//! | [`fulfilled`](Slice::fulfilled) | `false` | cleared | `true` | replaced |
//! | [`rejected`](Slice::rejected) | `false` | reason or default message | `false` | kept |
//!
//! [`reset`](Slice::reset) puts the slice back into its initial shape. Pages call
//! it after consuming a terminal state (closing a confirmation modal, leaving an
//! edit dialog) so a stale banner does not come back on the next mount.

/// State of one resource and the last operation on it.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
    pub success: bool,
    default_error: &'static str,
}

impl<T: Default> Slice<T> {
    /// An idle slice whose failures fall back to `default_error`.
    pub fn new(default_error: &'static str) -> Self {
        Self {
            data: T::default(),
            loading: false,
            error: None,
            success: false,
            default_error,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.default_error);
    }
}

impl<T> Slice<T> {
    pub fn pending(&mut self) {
        self.loading = true;
        self.error = None;
        self.success = false;
    }

    pub fn fulfilled(&mut self, payload: T) {
        self.loading = false;
        self.data = payload;
        self.success = true;
        self.error = None;
    }

    pub fn rejected(&mut self, reason: Option<String>) {
        self.loading = false;
        self.error = Some(reason.unwrap_or_else(|| self.default_error.to_string()));
        self.success = false;
    }

    /// Apply the outcome of an operation: `Ok` fulfils, `Err` rejects.
    pub fn settle(&mut self, outcome: Result<T, Option<String>>) {
        match outcome {
            Ok(payload) => self.fulfilled(payload),
            Err(reason) => self.rejected(reason),
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn default_error(&self) -> &'static str {
        self.default_error
    }

    /// Terminal failure that a page should surface.
    pub fn failed(&self) -> bool {
        !self.loading && self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_fulfilled_reset_returns_to_initial() {
        let initial: Slice<Vec<u32>> = Slice::new("Failed to fetch breeds");
        let mut slice = initial.clone();

        slice.pending();
        assert!(slice.loading);
        slice.fulfilled(vec![1, 2, 3]);
        assert!(!slice.loading);
        assert!(slice.success);
        assert_eq!(slice.data, vec![1, 2, 3]);

        slice.reset();
        assert_eq!(slice, initial);
    }

    #[test]
    fn test_rejected_uses_reason_or_default() {
        let mut slice: Slice<Option<u32>> = Slice::new("Failed to add pet");

        slice.pending();
        slice.rejected(Some("Pet name taken".into()));
        assert_eq!(slice.error.as_deref(), Some("Pet name taken"));
        assert!(slice.failed());

        slice.pending();
        assert!(slice.error.is_none());
        slice.rejected(None);
        assert_eq!(slice.error.as_deref(), Some("Failed to add pet"));
        assert!(!slice.success);
    }

    #[test]
    fn test_rejection_keeps_previous_data() {
        let mut slice: Slice<Vec<&str>> = Slice::new("Failed to fetch users");
        slice.fulfilled(vec!["ann"]);
        slice.pending();
        assert!(!slice.success);
        slice.settle(Err(None));
        assert_eq!(slice.data, vec!["ann"]);
        assert_eq!(slice.error.as_deref(), Some("Failed to fetch users"));
    }

    #[test]
    fn test_settle_ok_clears_error() {
        let mut slice: Slice<u8> = Slice::new("x");
        slice.rejected(None);
        slice.settle(Ok(5));
        assert_eq!(slice.data, 5);
        assert!(slice.error.is_none());
        assert!(slice.success);
    }
}
