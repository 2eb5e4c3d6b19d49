mod device_list;
mod popup;
mod toast;

pub use device_list::DeviceList;
pub use popup::{PopupBox, PopupHandle};
pub use toast::{ToastContainer, ToastProvider};
