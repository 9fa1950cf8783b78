// crates/wingman-app/src/pages/mod.rs
// Page components for Wingman Studio

mod home;

pub use home::HomePage;
