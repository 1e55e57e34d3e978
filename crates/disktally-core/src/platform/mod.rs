/// Platform capabilities: file ownership lookup and volume capacity.

pub mod owner;
pub mod volume;

pub use owner::{default_owner_resolver, NotApplicable, OwnerResolver};
#[cfg(unix)]
pub use owner::AccountOwner;
pub use volume::{disk_usage, DiskUsage};
