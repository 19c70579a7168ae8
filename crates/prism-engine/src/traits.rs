//! Capability traits for the engine boundary.
//!
//! Each trait mirrors one accessor of the external viewer module. All
//! traits are object-safe; the harness only ever holds `Box<dyn …>` or
//! `&mut dyn …` handles.

use glam::DVec3;

use prism_core::RenderSurface;
use prism_vfs::VirtualFs;

use crate::{AnimationDirection, Result, Verbosity};

/// Callback invoked when an interactor command is triggered.
///
/// Receives the whitespace-split arguments following the action token.
pub type CommandCallback = Box<dyn FnMut(&[String]) -> Result<()>>;

/// Factory producing a loaded engine module.
///
/// The asynchronous-factory analog of the compiled module's entry point:
/// one `load` call per test run, yielding the module handle or a load
/// failure.
pub trait ModuleLoader {
    /// Instantiate the module against the given render surface.
    fn load(&self, surface: &RenderSurface) -> Result<Box<dyn EngineModule>>;
}

/// A loaded viewer module.
pub trait EngineModule {
    /// The module's virtual filesystem.
    fn fs(&self) -> &VirtualFs;

    /// Register all available format readers.
    fn autoload_readers(&mut self);

    /// Create an engine instance. The harness creates exactly one per run,
    /// after the filesystem has been populated.
    fn create_engine(&mut self) -> Result<Box<dyn EngineInstance>>;

    /// Construct an image from a file in the virtual filesystem.
    fn load_image(&self, path: &str) -> Result<Box<dyn EngineImage>>;

    /// Construct a blank image with the given dimensions and channel count.
    fn new_image(&self, width: u32, height: u32, channel_count: u8) -> Result<Box<dyn EngineImage>>;

    /// File extensions the image type can read, e.g. `".png"`.
    fn supported_image_formats(&self) -> Vec<String>;

    /// Set the module's logging verbosity.
    fn set_verbosity(&mut self, verbosity: Verbosity);
}

/// An engine instance: the root handle to one viewer.
pub trait EngineInstance {
    /// Option store accessor.
    fn options(&mut self) -> &mut dyn OptionsHandle;

    /// Render window accessor.
    fn window(&mut self) -> &mut dyn WindowHandle;

    /// Scene accessor.
    fn scene(&mut self) -> &mut dyn SceneHandle;

    /// Interactor accessor.
    fn interactor(&mut self) -> &mut dyn InteractorHandle;

    /// Camera accessor.
    fn camera(&mut self) -> &mut dyn CameraHandle;
}

/// The loaded scene.
pub trait SceneHandle {
    /// Whether a registered reader handles this path.
    fn supports(&self, path: &str) -> bool;

    /// Load a file from the virtual filesystem into the scene.
    fn add(&mut self, path: &str) -> Result<()>;

    /// Remove all loaded content.
    fn clear(&mut self);
}

/// The render window.
pub trait WindowHandle {
    /// Resize the window to a physical pixel size.
    fn set_size(&mut self, width: u32, height: u32);

    /// Current physical pixel size.
    fn size(&self) -> (u32, u32);

    /// Render one frame to the window.
    fn render(&mut self);

    /// Render to an in-memory image. With `transparent` set, the
    /// background alpha is left unpremultiplied.
    fn render_to_image(&mut self, transparent: bool) -> Result<Box<dyn EngineImage>>;

    /// Convert a display-space point to world space.
    fn world_from_display(&self, point: [f64; 3]) -> [f64; 3];

    /// Convert a world-space point to display space.
    fn display_from_world(&self, point: [f64; 3]) -> [f64; 3];
}

/// The interaction loop and its command registry.
pub trait InteractorHandle {
    /// Start the interaction loop.
    fn start(&mut self);

    /// Stop the interaction loop.
    fn stop(&mut self);

    /// Request a render on the next loop iteration.
    fn request_render(&mut self);

    /// Register a command action.
    fn add_command(&mut self, action: &str, callback: CommandCallback) -> Result<()>;

    /// Remove a registered command action.
    fn remove_command(&mut self, action: &str) -> Result<()>;

    /// Names of all registered command actions.
    fn command_actions(&self) -> Vec<String>;

    /// Trigger a command line: the first token is the action, the rest
    /// are passed to its callback as arguments.
    fn trigger_command(&mut self, command_line: &str) -> Result<()>;

    /// Start animation playback in the given direction.
    fn start_animation(&mut self, direction: AnimationDirection);

    /// Stop animation playback.
    fn stop_animation(&mut self);

    /// Stop playback if an animation is playing, otherwise start playing
    /// in the given direction.
    fn toggle_animation(&mut self, direction: AnimationDirection);

    /// Whether an animation is currently playing.
    fn is_playing_animation(&self) -> bool;

    /// Direction of the current or most recent playback.
    fn animation_direction(&self) -> AnimationDirection;
}

/// The string-keyed option store.
pub trait OptionsHandle {
    /// Set an option from its string representation.
    fn set(&mut self, key: &str, value: &str);

    /// Read an option's string representation.
    fn get(&self, key: &str) -> Option<String>;

    /// Flip a boolean option. An unset key toggles to `true`.
    fn toggle(&mut self, key: &str) -> Result<()>;
}

/// The scene camera.
pub trait CameraHandle {
    /// Camera position in world space.
    fn position(&self) -> DVec3;

    /// Move the camera.
    fn set_position(&mut self, position: DVec3);

    /// Point the camera looks at.
    fn focal_point(&self) -> DVec3;

    /// Change the point the camera looks at.
    fn set_focal_point(&mut self, focal_point: DVec3);

    /// Rotate the camera around the focal point by `degrees` about the
    /// view-up axis.
    fn azimuth(&mut self, degrees: f64);

    /// Reset the camera to frame the loaded content.
    fn reset_to_bounds(&mut self);
}

/// An in-memory image.
pub trait EngineImage {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Channels per pixel (1 to 4).
    fn channel_count(&self) -> u8;

    /// Raw pixel bytes, row-major, `channel_count` bytes per pixel.
    fn data(&self) -> &[u8];

    /// Similarity score against another image. Zero means identical;
    /// lower is more similar. Dimension mismatch is an error.
    fn compare(&self, other: &dyn EngineImage) -> Result<f64>;

    /// Encode as PNG and write into the virtual filesystem.
    fn save(&self, fs: &VirtualFs, path: &str) -> Result<()>;

    /// Encode as PNG bytes.
    fn to_png(&self) -> Result<Vec<u8>>;

    /// Channel values of one pixel, normalized to `0..=1`.
    fn normalized_pixel(&self, x: u32, y: u32) -> Result<Vec<f64>>;

    /// Attach a metadata key/value pair.
    fn set_metadata(&mut self, key: &str, value: &str);

    /// Read a metadata value.
    fn metadata(&self, key: &str) -> Option<String>;

    /// All metadata keys.
    fn all_metadata(&self) -> Vec<String>;
}
