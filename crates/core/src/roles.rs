//! Role name constants.
//!
//! The studio has a single privileged role: admins manage portfolio items,
//! blog posts, bookings, and testimonials. Everything else is public.

pub const ROLE_ADMIN: &str = "admin";
