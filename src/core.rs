pub mod history;
pub mod translator;
