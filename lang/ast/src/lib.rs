mod env;
mod factory;
mod node;
mod print;
pub mod shadow;
mod tree;
mod types;
mod walk;

pub use env::*;
pub use node::*;
pub use tree::*;
pub use types::*;

pub type HashMap<K, V> = std::collections::HashMap<K, V, fxhash::FxBuildHasher>;
pub type HashSet<V> = fxhash::FxHashSet<V>;
