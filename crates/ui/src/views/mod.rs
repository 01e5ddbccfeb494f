pub mod applications;
pub mod concepts;
pub mod ethics;
pub mod mechanics;
pub mod prompting;
pub mod shared;
pub mod state;

pub use applications::ApplicationsView;
pub use concepts::ConceptsView;
pub use ethics::EthicsView;
pub use mechanics::MechanicsView;
pub use prompting::PromptingView;
pub use shared::ScoreBadge;
pub use state::ViewError;

#[cfg(test)]
pub mod test_harness;
#[cfg(test)]
mod view_smoke;
