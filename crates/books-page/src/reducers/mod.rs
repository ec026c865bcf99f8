pub mod books_reducer;
pub mod requests_reducer;
pub mod status_bar_reducer;
