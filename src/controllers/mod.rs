pub mod dubbing;
pub mod health;
pub mod home;
