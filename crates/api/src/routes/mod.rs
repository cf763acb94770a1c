pub mod auth;
pub mod blog;
pub mod booking;
pub mod contact;
pub mod design;
pub mod health;
pub mod newsletter;
pub mod portfolio;
pub mod testimonials;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/setup                 first-admin bootstrap (public, one-shot)
/// /auth/login                 login (public)
/// /auth/refresh               refresh (public)
/// /auth/logout                logout (requires auth)
/// /auth/me                    current user (requires auth)
/// /auth/register              create admin (admin only)
///
/// /design/generate            generate a design concept (rate limited)
/// /design/styles              supported style/size/color options
///
/// /bookings                   submit (rate limited), list (admin)
/// /bookings/{id}              get, update status (admin)
///
/// /contact                    submit (rate limited), list (admin)
/// /contact/{id}               mark read (admin)
///
/// /newsletter                 subscribe (rate limited), unsubscribe
///
/// /portfolio                  list, create (admin)
/// /portfolio/{id}             get, update, delete (admin)
///
/// /blog                       list published, create (admin)
/// /blog/{slug}                get published, update (admin)
///
/// /testimonials               approved list, submit (rate limited)
/// /testimonials/{id}          approve/reorder (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/design", design::router())
        .nest("/bookings", booking::router())
        .nest("/contact", contact::router())
        .nest("/newsletter", newsletter::router())
        .nest("/portfolio", portfolio::router())
        .nest("/blog", blog::router())
        .nest("/testimonials", testimonials::router())
}
