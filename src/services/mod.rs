//! Request-independent business logic behind the HTTP routes.

pub mod assistant;
