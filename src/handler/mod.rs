pub mod orders;
pub mod services;
pub mod stats;
pub mod test;
pub mod users;
pub mod workers;
