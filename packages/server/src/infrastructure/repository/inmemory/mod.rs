pub mod users;

pub use users::InMemoryUserRegistry;
