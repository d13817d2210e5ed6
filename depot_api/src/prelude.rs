pub use crate::DepotApi;
pub use crate::fresh_theme_id;
pub use crate::http::types::*;
pub use crate::preset::PresetFile;
pub use crate::storage::ThemeStorage;
pub use crate::store::ThemeStore;
pub use crate::theme::ThemeModel;
pub use crate::timestamp_millis;
