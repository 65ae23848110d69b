use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Type-safe row identifier. The phantom type parameter `T` keeps ids of
/// different entities apart.
///
/// Ids are not persisted: a fresh one is minted for every row each time the
/// table is loaded, so an id is only meaningful within the snapshot it came
/// from.
pub struct Id<T> {
    pub value: Uuid,
    _phantom: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: Uuid) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    pub fn generate() -> Self {
        Self::new(Uuid::new_v4())
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::generate()
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row;

    #[test]
    fn generate_creates_unique_ids() {
        let id1 = Id::<Row>::generate();
        let id2 = Id::<Row>::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn ids_with_same_uuid_are_equal() {
        let uuid = Uuid::new_v4();
        assert_eq!(Id::<Row>::new(uuid), Id::<Row>::new(uuid));
    }

    #[test]
    fn default_mints_a_fresh_id() {
        assert_ne!(Id::<Row>::default(), Id::<Row>::default());
    }
}
