//! Depth-first traversal shared by all three policies.
//!
//! The root is checked strictly: it must be a record, a pointer chain ending
//! in one, or a sequence/mapping whose elements are records or pointers.
//! Below the root the walk is lenient: nulls and primitive elements are
//! skipped.

use super::{
    ErrorMode, FilterOptions,
    policies::{FieldPolicy, Verdict},
};
use crate::{
    error::{Error, Result},
    reset::reset_field,
    selector::FieldSelector,
    walk::{Category, Elements, Node, Record, Walk},
};

pub(crate) struct Walker<'o, P> {
    policy: P,
    options: &'o FilterOptions,
}

impl<'o, 's, P: FieldPolicy<'s>> Walker<'o, P> {
    pub(crate) fn new(policy: P, options: &'o FilterOptions) -> Self {
        Self { policy, options }
    }

    /// Filters `root` in place, starting with `scope` at the top level.
    pub(crate) fn run<R: Walk + ?Sized>(
        &self,
        root: &mut R,
        scope: &'s [FieldSelector],
    ) -> Result<()> {
        let type_name = root.type_name();
        tracing::debug!(policy = P::NAME, root = type_name, "filter started");

        let node = root.node();
        let category = node.category();
        match node {
            Node::Primitive => Err(Error::UnsupportedRootCategory {
                type_name,
                category,
            }),
            Node::Record(record) => self.record(record, scope, 0),
            Node::Pointer(target) => self.record(follow(target, type_name)?, scope, 0),
            Node::Sequence(elements) | Node::Mapping(elements) => {
                if !matches!(elements.category(), Category::Record | Category::Pointer) {
                    return Err(Error::UnsupportedRootCategory {
                        type_name,
                        category,
                    });
                }
                self.elements(elements, scope)
            }
        }
    }

    fn elements(&self, elements: Elements<'_>, scope: &'s [FieldSelector]) -> Result<()> {
        let mut errors = Vec::new();
        for (index, element) in elements.enumerate() {
            let type_name = element.type_name();
            let target = match element.node() {
                Node::Record(record) => Ok(Some(record)),
                Node::Pointer(target) => match follow(target, type_name) {
                    Ok(record) => Ok(Some(record)),
                    Err(Error::NullReferencedElement { .. }) => Ok(None),
                    Err(err) => Err(err),
                },
                _ => Err(Error::NonRecordTarget { type_name }),
            };

            match target {
                Ok(Some(record)) => self.record(record, scope, 0)?,
                Ok(None) => {}
                Err(err) => match self.options.error_mode() {
                    ErrorMode::FailFast => return Err(err),
                    ErrorMode::Collect => errors.push(err),
                    ErrorMode::Suppress => {
                        tracing::warn!(
                            policy = P::NAME,
                            element = index,
                            error = %err,
                            "skipping element that could not be filtered"
                        );
                    }
                },
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Elements { errors })
        }
    }

    /// Filters one record. `depth` counts the records above it.
    fn record(
        &self,
        record: &mut dyn Record,
        scope: &'s [FieldSelector],
        depth: usize,
    ) -> Result<()> {
        let limit = self.options.max_depth();
        if depth > limit {
            return Err(Error::DepthLimitExceeded { limit });
        }

        let descriptor = record.descriptor();
        for (index, field) in descriptor.fields().iter().enumerate() {
            match self.policy.verdict(field, scope) {
                Verdict::Reset => {
                    tracing::trace!(
                        policy = P::NAME,
                        record = %descriptor.key(),
                        field = field.name(),
                        "reset field"
                    );
                    reset_field(record, index);
                }
                Verdict::Keep => {}
                Verdict::Descend(next) => {
                    if !field.category().is_traversable() {
                        continue;
                    }
                    if let Some(value) = record.field_mut(index) {
                        self.descend(value, next, depth)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Walks a field value owned by a record at `depth`. Pointer hops and
    /// collection elements do not add depth; only nested records do.
    fn descend(
        &self,
        value: &mut dyn Walk,
        scope: &'s [FieldSelector],
        depth: usize,
    ) -> Result<()> {
        match value.node() {
            Node::Primitive | Node::Pointer(None) => Ok(()),
            Node::Record(record) => self.record(record, scope, depth + 1),
            Node::Pointer(Some(target)) => self.descend(target, scope, depth),
            Node::Sequence(elements) | Node::Mapping(elements) => {
                if !elements.category().is_traversable() {
                    return Ok(());
                }
                for element in elements {
                    self.descend(element, scope, depth)?;
                }
                Ok(())
            }
        }
    }
}

/// Follows a pointer chain down to the record it ends in.
fn follow<'a>(
    mut target: Option<&'a mut dyn Walk>,
    mut type_name: &'static str,
) -> Result<&'a mut dyn Record> {
    loop {
        let Some(value) = target else {
            return Err(Error::NullReferencedElement { type_name });
        };
        type_name = value.type_name();
        match value.node() {
            Node::Record(record) => return Ok(record),
            Node::Pointer(next) => target = next,
            _ => return Err(Error::NonRecordTarget { type_name }),
        }
    }
}
