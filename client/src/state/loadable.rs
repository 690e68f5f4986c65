//! Settle-phase holder shared by every resource list.
//!
//! DESIGN
//! ======
//! A successful read replaces the whole value; a failed read leaves the prior
//! value untouched. There is no request tagging, so a late response can still
//! overwrite a newer one.

#[cfg(test)]
#[path = "loadable_test.rs"]
mod loadable_test;

/// A fetched value plus its in-flight flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Loadable<T> {
    pub data: T,
    pub loading: bool,
    /// Set after the first successful read; distinguishes "empty" from "never loaded".
    pub loaded: bool,
}

impl<T> Loadable<T> {
    pub fn begin(&mut self) {
        self.loading = true;
    }

    pub fn settle_ok(&mut self, data: T) {
        self.data = data;
        self.loading = false;
        self.loaded = true;
    }

    pub fn settle_err(&mut self) {
        self.loading = false;
    }
}
