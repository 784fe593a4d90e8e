mod components;
mod view;

pub use view::PassportView;
#[cfg(test)]
pub(crate) use view::UnlockTestHandles;
