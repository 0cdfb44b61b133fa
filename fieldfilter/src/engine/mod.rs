//! Policy engine: `redact`, `retain` and `clear`.
//!
//! All three entry points walk a value in place and reset the fields their
//! policy rejects:
//!
//! - **`redact`**: fields tagged `#[record(acl = "...")]` survive only when a
//!   granted credential matches one of their tags
//! - **`retain`**: an allow-list; fields not named by a selector are reset
//! - **`clear`**: a deny-list; fields named by a selector are reset
//!
//! The free functions use [`FilterOptions::default`]. Use [`Filter`] to pick
//! a different [`ErrorMode`] or depth limit.

mod policies;
mod walker;

use policies::{Clear, Redact, Retain};
use walker::Walker;

use crate::{error::Result, selector::FieldSelector, walk::Walk};

/// Default for [`FilterOptions::max_depth`], in nested records.
pub const DEFAULT_MAX_DEPTH: usize = 256;

// =============================================================================
// Options
// =============================================================================

/// How failures on individual sequence or mapping elements are reported.
///
/// Only applies to collection roots. A malformed root itself always fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorMode {
    /// Filter every element, then report all failures as
    /// [`Error::Elements`](crate::Error::Elements).
    #[default]
    Collect,
    /// Stop at the first failing element.
    FailFast,
    /// Log failures at `warn` level and keep going.
    Suppress,
}

/// Tuning knobs for a [`Filter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FilterOptions {
    error_mode: ErrorMode,
    max_depth: usize,
}

impl FilterOptions {
    /// Options with [`ErrorMode::Collect`] and [`DEFAULT_MAX_DEPTH`].
    pub const fn new() -> Self {
        Self {
            error_mode: ErrorMode::Collect,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets how element failures are reported.
    #[must_use]
    pub const fn with_error_mode(mut self, error_mode: ErrorMode) -> Self {
        self.error_mode = error_mode;
        self
    }

    /// Sets how many levels of nested records below the root the walk may
    /// enter. Pointers and collection elements between records do not count.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn error_mode(&self) -> ErrorMode {
        self.error_mode
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Filter
// =============================================================================

/// A configured policy engine.
///
/// ```
/// use fieldfilter::{ErrorMode, Filter, FilterOptions, Record};
///
/// #[derive(Record, Default)]
/// struct Account {
///     id: u64,
///     #[record(acl = "admin")]
///     email: String,
/// }
///
/// let filter = Filter::new(FilterOptions::new().with_error_mode(ErrorMode::FailFast));
/// let mut accounts = vec![Account { id: 1, email: "a@example.com".into() }];
/// filter.redact(&mut accounts, &["support"]).unwrap();
/// assert_eq!(accounts[0].id, 1);
/// assert!(accounts[0].email.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Filter {
    options: FilterOptions,
}

impl Filter {
    pub const fn new(options: FilterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Resets every tagged field that none of `credentials` unlocks.
    ///
    /// A tag matches a credential case-insensitively. A `*` tag, or a `*`
    /// credential, unlocks everything. Untagged fields are never touched.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedRootCategory`](crate::Error::UnsupportedRootCategory)
    ///   if `root` is not a record, a pointer to one, or a collection of them.
    /// - [`Error::NullReferencedElement`](crate::Error::NullReferencedElement)
    ///   or [`Error::NonRecordTarget`](crate::Error::NonRecordTarget) for a
    ///   pointer root that does not lead to a record.
    /// - [`Error::DepthLimitExceeded`](crate::Error::DepthLimitExceeded) if
    ///   records nest deeper than the configured limit. Fields visited before
    ///   the limit was hit stay reset.
    /// - Element failures as configured by [`ErrorMode`].
    pub fn redact<R, S>(&self, root: &mut R, credentials: &[S]) -> Result<()>
    where
        R: Walk + ?Sized,
        S: AsRef<str>,
    {
        Walker::new(Redact::new(credentials), &self.options).run(root, &[])
    }

    /// Keeps the fields named by `selectors` and resets everything else.
    ///
    /// Names match exactly; `*` matches any field. A selector without
    /// children keeps its field whole. Records held by value are filtered
    /// like records behind a pointer, so `pet(name)` resets the other fields
    /// of `pet`.
    ///
    /// # Errors
    ///
    /// As for [`Filter::redact`].
    pub fn retain<R>(&self, root: &mut R, selectors: &[FieldSelector]) -> Result<()>
    where
        R: Walk + ?Sized,
    {
        Walker::new(Retain, &self.options).run(root, selectors)
    }

    /// Resets the fields named by `selectors` and keeps everything else.
    ///
    /// Names match case-insensitively; `*` matches any field. A selector
    /// resets its field when it has no children or its first child is `*`.
    /// Records held by value are descended into like records behind a
    /// pointer.
    ///
    /// # Errors
    ///
    /// As for [`Filter::redact`].
    pub fn clear<R>(&self, root: &mut R, selectors: &[FieldSelector]) -> Result<()>
    where
        R: Walk + ?Sized,
    {
        Walker::new(Clear, &self.options).run(root, selectors)
    }
}

// =============================================================================
// Free functions
// =============================================================================

/// [`Filter::redact`] with default options.
pub fn redact<R, S>(root: &mut R, credentials: &[S]) -> Result<()>
where
    R: Walk + ?Sized,
    S: AsRef<str>,
{
    Filter::default().redact(root, credentials)
}

/// [`Filter::retain`] with default options.
pub fn retain<R>(root: &mut R, selectors: &[FieldSelector]) -> Result<()>
where
    R: Walk + ?Sized,
{
    Filter::default().retain(root, selectors)
}

/// [`Filter::clear`] with default options.
pub fn clear<R>(root: &mut R, selectors: &[FieldSelector]) -> Result<()>
where
    R: Walk + ?Sized,
{
    Filter::default().clear(root, selectors)
}

// =============================================================================
// Filterable - method syntax
// =============================================================================

/// Method-call forms of the policy entry points, for every [`Walk`] type.
///
/// ```
/// use fieldfilter::{Filterable, Record, Selection};
///
/// #[derive(Record, Default)]
/// struct Profile {
///     name: String,
///     age: u32,
/// }
///
/// let mut profile = Profile { name: "Ada".into(), age: 36 };
/// let selection: Selection = "age".parse().unwrap();
/// profile.clear_fields(&selection).unwrap();
/// assert_eq!(profile.name, "Ada");
/// assert_eq!(profile.age, 0);
/// ```
pub trait Filterable: Walk {
    /// See [`redact`].
    fn redact_for<S: AsRef<str>>(&mut self, credentials: &[S]) -> Result<()> {
        redact(self, credentials)
    }

    /// See [`retain`].
    fn retain_only(&mut self, selectors: &[FieldSelector]) -> Result<()> {
        retain(self, selectors)
    }

    /// See [`clear`].
    fn clear_fields(&mut self, selectors: &[FieldSelector]) -> Result<()> {
        clear(self, selectors)
    }
}

impl<T: Walk + ?Sized> Filterable for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = FilterOptions::default();
        assert_eq!(options.error_mode(), ErrorMode::Collect);
        assert_eq!(options.max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn builder_overrides_defaults() {
        let options = FilterOptions::new()
            .with_error_mode(ErrorMode::Suppress)
            .with_max_depth(4);
        assert_eq!(options.error_mode(), ErrorMode::Suppress);
        assert_eq!(options.max_depth(), 4);
        assert_eq!(Filter::new(options).options(), &options);
    }
}
