// HTTP request handlers for the callback relay
pub mod callback;
pub mod health;

// Re-export the main handler functions
pub use callback::auth_callback;
pub use health::health;
