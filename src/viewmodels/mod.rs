pub mod pagination_viewmodel;

pub use pagination_viewmodel::{controls_for, page_window, PageCursor, PaginationControls, PaginationViewModel};
