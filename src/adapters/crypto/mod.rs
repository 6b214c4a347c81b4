mod rsa_sha1;

pub use rsa_sha1::*;
