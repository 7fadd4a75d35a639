pub mod edit;
pub mod init;
pub mod preview;
pub mod render;
pub mod sections;

pub use edit::{edit, EditArgs};
pub use init::{init, InitArgs};
pub use preview::{preview, PreviewArgs};
pub use render::{render, RenderArgs};
pub use sections::sections;
