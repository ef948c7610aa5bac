pub mod fits;
pub mod loader;
pub mod preview;
pub mod template;

pub use fits::{read_fits, read_frame, FitsHeader};
pub use loader::{load_sequence, load_stack};
pub use template::PathTemplate;
