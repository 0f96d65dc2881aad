pub mod token_fingerprint;

pub use token_fingerprint::fingerprint;
