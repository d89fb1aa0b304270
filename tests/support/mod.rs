// tests/support/mod.rs
// Shared by several integration test binaries; each uses a different subset.
#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(dead_code, unused_imports)]
pub mod clock;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use clock::*;
#[allow(unused_imports)]
pub use helpers::*;
