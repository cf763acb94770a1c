pub mod auth;
pub mod blog;
pub mod booking;
pub mod contact;
pub mod design;
pub mod newsletter;
pub mod portfolio;
pub mod testimonials;
