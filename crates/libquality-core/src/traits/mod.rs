//! Seams between the view and the outside world.

mod resolver;
mod store;

pub use resolver::RepositoryResolver;
pub use store::KeyValueStore;
