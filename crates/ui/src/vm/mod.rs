mod pass_vm;
mod unlock_vm;

pub use pass_vm::{
    BadgeVm, PassVm, ProgressVm, StationBubbleVm, StationDetailVm, StationPatchVm, render_badge,
    render_pass, render_progress, render_station_gallery, render_station_patch,
};
pub use unlock_vm::{UnlockFormVm, UnlockMessageVm, UnlockTone};
