/*
Banklink protocol type definitions.

This module is the single source of truth for the wire vocabulary of the
handshake: field names, service/version codes, the canonical signed-field
order, the redirect/callback value types, and the identity extracted from a
verified callback.

It intentionally keeps all key material and crypto out (those live behind
`ports`/`adapters`); everything here is plain data plus validation, so the
types are freely clonable and serializable.
*/

pub mod config;
pub mod fields;
pub mod identity;
pub mod params;

pub use config::*;
pub use fields::*;
pub use identity::*;
