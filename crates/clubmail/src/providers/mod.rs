//! Email provider abstraction and implementations

mod resend;
mod traits;

#[cfg(test)]
pub mod mock;

pub use resend::ResendProvider;
pub use traits::*;

#[cfg(test)]
pub use mock::MockEmailProvider;
