//! Record metadata and the process-wide descriptor cache.
//!
//! `#[derive(Record)]` emits a [`RecordSchema`]: the field names, their
//! categories and the raw `acl` annotation strings exactly as written. The
//! cache turns a schema into a [`TypeDescriptor`] the first time a type is
//! seen and hands out the same `Arc` for the rest of the process.
//!
//! Descriptors are keyed by [`TypeId`], so every instance of a type (and every
//! monomorphization of a generic record) shares exactly one entry.

use std::{
    any::TypeId,
    collections::HashMap,
    fmt,
    hash::{Hash, Hasher},
    sync::{Arc, LazyLock, PoisonError, RwLock},
};

use crate::walk::{Category, Record, Walk};

/// The reserved tag or selector name that matches everything.
pub const WILDCARD: &str = "*";

// =============================================================================
// Raw schema - what the derive macro emits
// =============================================================================

/// One field as declared on a record, before annotation parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawField {
    /// Name used for selector matching.
    pub name: &'static str,
    /// Structural category of the field's type.
    pub category: Category,
    /// The `acl` annotation, verbatim.
    pub acl: Option<&'static str>,
}

impl RawField {
    /// Creates a raw field description.
    pub const fn new(name: &'static str, category: Category, acl: Option<&'static str>) -> Self {
        Self {
            name,
            category,
            acl,
        }
    }
}

/// Uncached metadata for a record type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSchema {
    /// Module path the record is declared in.
    pub namespace: &'static str,
    /// Bare type name.
    pub name: &'static str,
    /// Fields in declaration order.
    pub fields: Vec<RawField>,
}

// =============================================================================
// Descriptors
// =============================================================================

/// Stable identity of a described type.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: Option<TypeId>,
    namespace: &'static str,
    name: &'static str,
}

impl TypeKey {
    fn of<T: 'static>(namespace: &'static str, name: &'static str) -> Self {
        Self {
            id: Some(TypeId::of::<T>()),
            namespace,
            name,
        }
    }

    /// Module path of the type (empty for non-record types).
    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Runtime identity, absent for the empty descriptor.
    pub fn type_id(&self) -> Option<TypeId> {
        self.id
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            f.write_str(self.name)
        } else {
            write!(f, "{}:{}", self.namespace, self.name)
        }
    }
}

/// One described record field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: &'static str,
    category: Category,
    tags: Vec<String>,
}

impl FieldDescriptor {
    pub(crate) fn from_raw(raw: &RawField) -> Self {
        Self {
            name: raw.name,
            category: raw.category,
            tags: parse_tags(raw.acl),
        }
    }

    /// Field name as matched by selectors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Structural category of the field's type.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Declared credential tags. Empty means the field is never redacted.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns `true` if the field declares at least one credential tag.
    pub fn is_tagged(&self) -> bool {
        !self.tags.is_empty()
    }
}

/// Cached metadata for one type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDescriptor {
    key: TypeKey,
    category: Category,
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// The descriptor of an absent type: no identity, no fields.
    pub fn empty() -> Self {
        Self {
            key: TypeKey {
                id: None,
                namespace: "",
                name: "",
            },
            category: Category::Primitive,
            fields: Vec::new(),
        }
    }

    fn build<T: Walk>() -> Self {
        match T::record_schema() {
            Some(schema) => Self {
                key: TypeKey::of::<T>(schema.namespace, schema.name),
                category: Category::Record,
                fields: schema.fields.iter().map(FieldDescriptor::from_raw).collect(),
            },
            None => Self {
                key: TypeKey::of::<T>("", std::any::type_name::<T>()),
                category: T::category(),
                fields: Vec::new(),
            },
        }
    }

    /// Identity of the described type.
    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    /// Structural category of the described type.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Fields in declaration order. Empty for non-record types.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Looks up a field by exact name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl Default for TypeDescriptor {
    fn default() -> Self {
        Self::empty()
    }
}

/// Splits a raw `acl` annotation into trimmed, non-empty credential tags.
fn parse_tags(annotation: Option<&str>) -> Vec<String> {
    let Some(annotation) = annotation.map(str::trim).filter(|value| !value.is_empty()) else {
        return Vec::new();
    };
    annotation
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

// =============================================================================
// TypeCache
// =============================================================================

static GLOBAL: LazyLock<TypeCache> = LazyLock::new(TypeCache::new);

/// Memoizes one [`TypeDescriptor`] per type.
///
/// Lookups share a read lock; a miss builds the descriptor outside the lock
/// and inserts it under the write lock, keeping whichever entry landed first.
#[derive(Default)]
pub struct TypeCache {
    entries: RwLock<HashMap<TypeId, Arc<TypeDescriptor>>>,
}

impl TypeCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by the policy engine.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Returns the descriptor for `T`, computing it on first use.
    pub fn get<T: Walk>(&self) -> Arc<TypeDescriptor> {
        let id = TypeId::of::<T>();
        if let Some(found) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
        {
            return Arc::clone(found);
        }

        let built = Arc::new(TypeDescriptor::build::<T>());
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.entry(id).or_insert_with(|| {
            tracing::debug!(
                type_key = %built.key,
                fields = built.fields.len(),
                "cached type descriptor"
            );
            Arc::clone(&built)
        });
        Arc::clone(entry)
    }

    /// Number of cached descriptors.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for TypeCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeCache")
            .field("len", &self.len())
            .finish()
    }
}

/// Returns the globally cached descriptor for `T`.
pub fn descriptor_of<T: Walk>() -> Arc<TypeDescriptor> {
    TypeCache::global().get::<T>()
}

/// Returns the descriptor of a record value, or the empty descriptor when
/// there is no value.
pub fn descriptor_of_val(value: Option<&dyn Record>) -> Arc<TypeDescriptor> {
    match value {
        Some(record) => record.descriptor(),
        None => Arc::new(TypeDescriptor::empty()),
    }
}
