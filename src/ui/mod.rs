pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{error, hint, info, muted, rule, success, warn};
pub use theme::{theme, Theme};
