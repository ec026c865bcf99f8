//! Books page
//!
//! A book catalog page driven by a reducer-based store. The page
//! dispatches intents; `BooksMiddleware` performs the matching books
//! service calls and feeds the results back through the `Dispatcher`;
//! reducers fold them into `AppState`; memoized selectors derive the
//! views the page shows.

pub mod actions;
pub mod books_page;
pub mod commands;
pub mod dispatcher;
pub mod logger;
pub mod middleware;
pub mod reducer;
pub mod reducers;
pub mod selectors;
pub mod state;
pub mod store;

pub use books_page::{BooksPage, BooksPageViews, SaveRequest};
pub use dispatcher::Dispatcher;
pub use state::AppState;
pub use store::Store;
