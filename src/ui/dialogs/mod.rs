//! Dialog windows

pub mod about;
pub mod alert;

use crate::core::DetectionResult;

/// State for dialog windows
#[derive(Default, Clone)]
pub enum DialogState {
    #[default]
    None,
    About,
    Alert(DetectionResult),
}
