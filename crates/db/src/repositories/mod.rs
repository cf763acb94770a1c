//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod blog_repo;
pub mod booking_repo;
pub mod contact_repo;
pub mod newsletter_repo;
pub mod portfolio_repo;
pub mod session_repo;
pub mod testimonial_repo;
pub mod user_repo;

pub use blog_repo::BlogRepo;
pub use booking_repo::BookingRepo;
pub use contact_repo::ContactRepo;
pub use newsletter_repo::NewsletterRepo;
pub use portfolio_repo::PortfolioRepo;
pub use session_repo::SessionRepo;
pub use testimonial_repo::TestimonialRepo;
pub use user_repo::UserRepo;
