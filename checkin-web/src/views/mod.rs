mod page;

pub use page::render_page;
