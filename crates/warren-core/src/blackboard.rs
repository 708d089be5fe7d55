use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

const fn fnv1a(name: &str) -> u64 {
    let bytes = name.as_bytes();
    let mut hash = 0xcbf2_9ce4_8422_2325u64;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        i += 1;
    }
    hash
}

/// Typed handle into a [`Blackboard`] slot.
///
/// Keys are authored as string names (`BbKey::<u64>::named("attack_enemy")`)
/// and hashed at construction; the phantom type pins what the slot stores,
/// so a `get` with the wrong type is a programming error, not a silent miss.
pub struct BbKey<T: 'static> {
    id: u64,
    name: &'static str,
    _slot: PhantomData<fn() -> T>,
}

impl<T: 'static> BbKey<T> {
    pub const fn named(name: &'static str) -> Self {
        Self {
            id: fnv1a(name),
            name,
            _slot: PhantomData,
        }
    }

    pub const fn id(self) -> u64 {
        self.id
    }

    pub const fn name(self) -> &'static str {
        self.name
    }
}

impl<T: 'static> Copy for BbKey<T> {}

impl<T: 'static> Clone for BbKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> fmt::Debug for BbKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BbKey")
            .field("name", &self.name)
            .field("id", &self.id)
            .finish()
    }
}

impl<T: 'static> PartialEq for BbKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T: 'static> Eq for BbKey<T> {}

struct Slot {
    name: &'static str,
    value: Box<dyn Any>,
}

/// Per-agent scratch store bridging sibling behavior-tree nodes within one
/// planning step. Discovery leaves write targets here; act-on-discovery
/// leaves read them back. Never shared across agents.
#[derive(Default)]
pub struct Blackboard {
    slots: BTreeMap<u64, Slot>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn contains<T: 'static>(&self, key: BbKey<T>) -> bool {
        self.slots.contains_key(&key.id)
    }

    pub fn insert<T: 'static>(&mut self, key: BbKey<T>, value: T) {
        self.slots.insert(
            key.id,
            Slot {
                name: key.name,
                value: Box::new(value),
            },
        );
    }

    /// Panics if the slot holds a value of a different type than `key`
    /// promises; two keys with the same name must agree on the type.
    pub fn get<T: 'static>(&self, key: BbKey<T>) -> Option<&T> {
        let slot = self.slots.get(&key.id)?;
        match slot.value.downcast_ref::<T>() {
            Some(value) => Some(value),
            None => panic!("blackboard slot \"{}\" holds a different type", slot.name),
        }
    }

    pub fn get_mut<T: 'static>(&mut self, key: BbKey<T>) -> Option<&mut T> {
        let slot = self.slots.get_mut(&key.id)?;
        match slot.value.downcast_mut::<T>() {
            Some(value) => Some(value),
            None => panic!("blackboard slot \"{}\" holds a different type", slot.name),
        }
    }

    pub fn take<T: 'static>(&mut self, key: BbKey<T>) -> Option<T> {
        let slot = self.slots.remove(&key.id)?;
        match slot.value.downcast::<T>() {
            Ok(value) => Some(*value),
            Err(_) => panic!("blackboard slot \"{}\" holds a different type", slot.name),
        }
    }
}
