pub mod customer;
pub mod id;
pub mod reservation;
