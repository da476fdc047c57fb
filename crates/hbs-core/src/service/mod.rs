//! Business logic services (use cases).
//!
//! Services orchestrate filesystem operations and the prompt builder. They
//! depend on traits (ports) -- never on concrete infrastructure
//! implementations.

pub mod character;
pub mod fs;
