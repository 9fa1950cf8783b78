// crates/wingman-app/src/components/generate/mod.rs
// Generator component re-exports

mod answer_card;
mod dropdown;
mod loading_dots;

pub use answer_card::AnswerCard;
pub use dropdown::DropDown;
pub use loading_dots::LoadingDots;
