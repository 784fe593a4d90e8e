mod passport;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use passport::PassportView;
pub use state::{ViewError, ViewState, view_state_from_resource};
