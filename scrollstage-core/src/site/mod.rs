pub mod app;
pub mod contact;
pub mod pages;
pub mod routes;
pub mod showcase;
pub mod specs;
