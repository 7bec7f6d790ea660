// UI Components
pub mod command_bar;
pub mod dialog;
pub mod file_list;
pub mod picker;
pub mod side_panel;
pub mod status_bar;
pub mod text_field;
pub mod title_bar;
pub mod warning;

pub use command_bar::CommandBar;
pub use dialog::{ConfirmPurpose, Dialog, DialogKind, InputPurpose};
pub use file_list::FileList;
pub use picker::FolderPickerView;
pub use side_panel::SidePanel;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
pub use warning::WarningScreen;
