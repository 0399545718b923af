pub mod grid;

pub use self::grid::Coord;
pub use self::grid::Grid;

use ahash::RandomState;
use linked_hash_set::LinkedHashSet;

pub type AHashLinkedHashSet<T> = LinkedHashSet<T, RandomState>;
