//! Crate root for `banklink`.
//!
//! A bank-redirect ("banklink") authentication handshake: the relying party
//! sends the user to the bank with a digitally-signed request, and later
//! receives a digitally-signed callback asserting the user's verified
//! identity.
//!
//! High-level tree:
//! * `core::codec` – length-prefixed signature-input encoding and base64
//!   signature transport.
//! * `domain::banklink` – protocol constants, field/identity types, and the
//!   immutable flow configuration.
//! * `ports` – boundary traits for signing, verification, and key loading.
//! * `adapters` – RSA-SHA1 and PEM/X.509 implementations of the ports.
//! * `application::auth` – the outbound request builder, the callback
//!   validation state machine, and the phase gateway tying them together.
pub mod adapters;
pub mod application;
pub mod core;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod test_support;
