pub mod host_guard;

pub use host_guard::host_guard;
