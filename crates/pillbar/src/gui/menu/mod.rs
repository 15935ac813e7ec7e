pub mod model;
pub mod view;
pub mod widget;

pub use model::MenuState;
pub use widget::{MenuBar, MenuInit, MenuMsg, MenuOutput};

pub const MENU_HEIGHT: i32 = 44;
pub const LABEL_FONT_FAMILY: &str = "Sans";
pub const TINT_FADE_DURATION: f64 = 0.15; // label cross-fade seconds
