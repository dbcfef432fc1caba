use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

/// Entities addressable by a typed [`ID`].
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

/// A v7 UUID tagged with the entity it names, so a task id never
/// type-checks where a member id is expected. The tag is `fn() -> T`
/// so the id stays `Send + Sync + Copy` whatever `T` is.
pub struct ID<T>(Uuid, PhantomData<fn() -> T>);

impl<T> ID<T> {
    /// Time-ordered: ids minted later sort later.
    pub fn now() -> Self {
        Self::from(Uuid::now_v7())
    }
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self::now()
    }
}

impl<T> From<Uuid> for ID<T> {
    fn from(uuid: Uuid) -> Self {
        Self(uuid, PhantomData)
    }
}

impl<T> From<ID<T>> for Uuid {
    fn from(id: ID<T>) -> Self {
        id.0
    }
}

impl<T> FromStr for ID<T> {
    type Err = uuid::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(s).map(Self::from)
    }
}

// derives would bound T; every impl below looks at the uuid only
impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Hash for ID<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl<T> fmt::Display for ID<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
impl<T> fmt::Debug for ID<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID({})", self.0)
    }
}
