//! # Lema Models
//!
//! Domain models and DTOs for the Lema API: database entities, request
//! bodies with their validation rules, and response payloads.
//!
//! - [`users`]: users, their addresses, paginated user listings
//! - [`posts`]: posts and the create-post request

pub mod posts;
pub mod users;

pub use posts::{CreatePostDto, NewPost, Post, PostFilterParams};
pub use users::{
    Address, CreateAddressDto, CreateUserDto, PaginatedUsers, User, UserCount, UserWithAddressRow,
};
