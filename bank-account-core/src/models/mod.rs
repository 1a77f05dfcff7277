pub mod account;
pub mod amortization;

// Re-exports
pub use account::*;
pub use amortization::*;
