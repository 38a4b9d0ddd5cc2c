pub mod page_window;
