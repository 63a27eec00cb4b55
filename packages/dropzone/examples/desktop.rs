//! Drop files onto the window to list their paths.
//!
//! ```sh
//! cargo run -p dropzone --example desktop --features desktop
//! ```

use dropzone::desktop::DesktopConfig;
use dropzone::logger::init_logger;
use tracing::Level;

fn main() -> dropzone::Result<()> {
    _ = init_logger(Level::DEBUG);

    dropzone::desktop::launch(
        DesktopConfig::new()
            .with_title("Dropped files")
            .with_inner_size(640.0, 480.0),
    )
}
