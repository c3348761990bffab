pub mod cashbook;
pub mod entry_form;
