mod home;
mod level_map;
mod notice;
mod quiz;
mod star_field;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use level_map::LevelMap;
pub use notice::Notice;
pub use quiz::QuizView;
pub use star_field::{StarField, StarLayer};
pub use state::{ViewError, ViewState, view_state_from_resource};
