pub mod state;
pub mod traits;

pub use state::PickerState;
pub use traits::DatePicker;
