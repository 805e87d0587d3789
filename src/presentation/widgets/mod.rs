mod delete_background;
mod footer_bar;
mod status_bar;
mod swipe_list;
mod swipe_row;

pub use delete_background::{
    CANCEL_ICON, DELETE_ICON, DEFAULT_PROMPT, DeleteBackground, DeleteBackgroundLayout,
};
pub use footer_bar::{FooterBar, FooterBarStyle};
pub use status_bar::{StatusBar, StatusLevel};
pub use swipe_list::{SwipeList, SwipeListState};
pub use swipe_row::{OnDelete, RowContent, SwipeRow, SwipeToDelete};
