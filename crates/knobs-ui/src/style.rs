//! Presentation class names applied to panel elements.

pub const PANEL: &str = "knobs";
pub const ROOT: &str = "knobs-root";
pub const FOLDER: &str = "knobs-folder";
pub const FOLDER_HEADER: &str = "knobs-folder-header";
pub const FOLDER_CHILDREN: &str = "knobs-folder-children";
/// Present on a folder's content region while the folder is collapsed.
pub const HIDDEN: &str = "knobs-hidden";
pub const CONTROL: &str = "knobs-control";
pub const LABEL: &str = "knobs-label";
pub const INPUTS: &str = "knobs-inputs";
pub const BUTTON: &str = "knobs-button";
