pub mod controller;
pub mod repository;
pub mod router;
pub mod service;

pub use repository::{PostRepository, SqlxPostRepository};
pub use router::init_posts_router;
pub use service::PostService;
