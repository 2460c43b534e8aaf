pub mod handler;
pub mod model;
pub mod route;
pub mod view;
