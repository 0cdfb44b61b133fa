//! The three field policies.
//!
//! Each policy looks at one [`FieldDescriptor`] within the current selector
//! scope and answers with a [`Verdict`]. The walker does the rest.

use crate::{
    descriptor::{FieldDescriptor, WILDCARD},
    selector::{FieldSelector, eq_fold},
};

/// What to do with one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Verdict<'s> {
    /// Assign the zero value and do not descend.
    Reset,
    /// Leave the field and everything below it alone.
    Keep,
    /// Leave the field, then filter its contents with the given scope.
    Descend(&'s [FieldSelector]),
}

pub(crate) trait FieldPolicy<'s> {
    /// Short name used in log events.
    const NAME: &'static str;

    fn verdict(&self, field: &FieldDescriptor, scope: &'s [FieldSelector]) -> Verdict<'s>;
}

// =============================================================================
// Redact - credential tags
// =============================================================================

/// Resets tagged fields none of the granted credentials unlock.
pub(crate) struct Redact<'c, S> {
    credentials: &'c [S],
    granted_wildcard: bool,
}

impl<'c, S: AsRef<str>> Redact<'c, S> {
    pub(crate) fn new(credentials: &'c [S]) -> Self {
        Self {
            credentials,
            granted_wildcard: credentials.iter().any(|c| c.as_ref() == WILDCARD),
        }
    }

    fn unlocks(&self, tags: &[String]) -> bool {
        self.granted_wildcard
            || tags.iter().any(|tag| {
                tag == WILDCARD
                    || self
                        .credentials
                        .iter()
                        .any(|granted| eq_fold(granted.as_ref(), tag))
            })
    }
}

impl<'s, S: AsRef<str>> FieldPolicy<'s> for Redact<'_, S> {
    const NAME: &'static str = "redact";

    fn verdict(&self, field: &FieldDescriptor, scope: &'s [FieldSelector]) -> Verdict<'s> {
        if field.is_tagged() && !self.unlocks(field.tags()) {
            Verdict::Reset
        } else {
            Verdict::Descend(scope)
        }
    }
}

// =============================================================================
// Retain - allow-list
// =============================================================================

/// Keeps selected fields and resets everything else.
pub(crate) struct Retain;

impl<'s> FieldPolicy<'s> for Retain {
    const NAME: &'static str = "retain";

    fn verdict(&self, field: &FieldDescriptor, scope: &'s [FieldSelector]) -> Verdict<'s> {
        match scope.iter().find(|selector| selector.matches(field.name())) {
            None => Verdict::Reset,
            Some(selector) if selector.is_leaf() => Verdict::Keep,
            Some(selector) => Verdict::Descend(selector.children()),
        }
    }
}

// =============================================================================
// Clear - deny-list
// =============================================================================

/// Resets selected fields and keeps everything else.
pub(crate) struct Clear;

impl<'s> FieldPolicy<'s> for Clear {
    const NAME: &'static str = "clear";

    fn verdict(&self, field: &FieldDescriptor, scope: &'s [FieldSelector]) -> Verdict<'s> {
        let mut next: &'s [FieldSelector] = &[];
        for selector in scope
            .iter()
            .filter(|selector| selector.matches_ignore_case(field.name()))
        {
            let children = selector.children();
            if children.first().is_none_or(FieldSelector::is_wildcard) {
                return Verdict::Reset;
            }
            next = children;
        }
        // Unmatched fields still descend with an empty scope, which clears
        // nothing below them.
        Verdict::Descend(next)
    }
}
