use crate::framework::error::{ProtocolError, ProtocolResult};
use crate::framework::traits::{TaggedWritable, Writable};
use lazy_static::lazy_static;
use log::debug;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Produces a zero instance ready for `read_fields`.
pub type WritableFactory = fn() -> Box<dyn Writable>;

lazy_static! {
    /// Process-wide registry consulted by polymorphic readers.
    pub static ref WRITABLE_REGISTRY: WritableRegistry = WritableRegistry::new();
}

/// Maps type tags to factories of zero-initialized records.
#[derive(Debug, Default)]
pub struct WritableRegistry {
    factories: RwLock<HashMap<String, WritableFactory>>,
}

fn zero_instance<T: TaggedWritable>() -> Box<dyn Writable> {
    Box::<T>::default()
}

impl WritableRegistry {
    pub fn new() -> Self {
        WritableRegistry {
            factories: RwLock::new(HashMap::new()),
        }
    }

    pub fn register<T: TaggedWritable>(&self) -> ProtocolResult<()> {
        self.register_factory(T::TYPE_TAG, zero_instance::<T>)
    }

    /// Fails with `DuplicateTag` when `tag` already has a factory; the existing one is kept.
    pub fn register_factory(&self, tag: &str, factory: WritableFactory) -> ProtocolResult<()> {
        let mut factories = self
            .factories
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if factories.contains_key(tag) {
            return Err(ProtocolError::DuplicateTag(tag.to_string()));
        }
        factories.insert(tag.to_string(), factory);
        debug!("Registered writable factory for {tag}");
        Ok(())
    }

    pub fn new_instance(&self, tag: &str) -> ProtocolResult<Box<dyn Writable>> {
        let factories = self
            .factories
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let factory = factories
            .get(tag)
            .ok_or_else(|| ProtocolError::UnknownTag(tag.to_string()))?;
        Ok(factory())
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(tag)
    }

    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        tags.sort();
        tags
    }
}
