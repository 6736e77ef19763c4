pub mod item;
pub mod memory;
pub mod user;

pub use item::PostgresItemRepository;
pub use memory::InMemoryItemRepository;
pub use memory::InMemoryUserRepository;
pub use user::PostgresUserRepository;
