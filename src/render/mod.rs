pub mod estimate;
pub mod export;
pub mod format;
pub mod info;
pub mod page;
pub mod print;

pub use estimate::render_summary;
pub use export::summary_csv;
pub use info::{render_contacts, render_contractors, render_fees, render_inspections};
pub use page::render_page;
pub use print::printable;
