pub mod mvc;
pub mod mvp;
pub mod mvvm;
