pub mod memory;
pub mod repository;
pub mod service;

pub use memory::MemoryEntityStore;
pub use repository::{EntityStore, SeaOrmEntityStore};
pub use service::EntityService;
