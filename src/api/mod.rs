// HTTP surface of the navigation service

pub mod navigation;
pub mod status;
