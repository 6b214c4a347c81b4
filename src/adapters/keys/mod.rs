mod pem;

pub use pem::*;
