pub mod cocktails;
pub mod pages;
