pub mod secret_storage;

pub use secret_storage::SecretStorage;
