//! Business logic services for the application layer.

pub mod link_allocator;
pub mod request_router;

pub use link_allocator::{AllocationPolicy, LinkAllocator};
pub use request_router::RequestRouter;
