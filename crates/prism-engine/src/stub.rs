//! Deterministic headless reference engine.
//!
//! Implements the whole capability boundary in software: scene loading
//! reads staged bytes from the virtual filesystem, rendering produces a
//! content-seeded deterministic image, and comparison is a normalized
//! mean-absolute-difference score (0 = identical, lower = more similar).
//!
//! The stub exists so the harness and the testrunner can be exercised
//! without the compiled viewer artifact.

use std::io::Cursor;
use std::sync::Arc;

use glam::{DMat3, DVec3};
use hashbrown::HashMap;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use parking_lot::RwLock;
use tracing::{debug, trace};

use prism_core::RenderSurface;
use prism_vfs::VirtualFs;

use crate::traits::{
    CameraHandle, CommandCallback, EngineImage, EngineInstance, EngineModule, InteractorHandle,
    ModuleLoader, OptionsHandle, SceneHandle, WindowHandle,
};
use crate::{AnimationDirection, EngineError, Result, Verbosity};

const BACKGROUND_KEY: &str = "render.background.color";

/// Display-to-world scale used by the stub's space conversion.
const DISPLAY_SCALE: f64 = 100.0;

/// Loader for the stub engine.
#[derive(Default)]
pub struct StubLoader {
    fail_with: Option<String>,
}

impl StubLoader {
    /// A loader that succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A loader that rejects with the given message, for exercising the
    /// harness error boundary.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
        }
    }
}

impl ModuleLoader for StubLoader {
    fn load(&self, surface: &RenderSurface) -> Result<Box<dyn EngineModule>> {
        if let Some(message) = &self.fail_with {
            return Err(EngineError::Load(message.clone()));
        }
        Ok(Box::new(StubModule::new(*surface)))
    }
}

/// One loaded scene entry: the content hash drives the rendered pattern.
struct LoadedContent {
    path: String,
    seed: u64,
}

/// State shared by the module and every handle of its engine instance.
struct StubState {
    fs: VirtualFs,
    reader_extensions: Vec<&'static str>,
    window_size: (u32, u32),
    options: HashMap<String, String>,
    loaded: Vec<LoadedContent>,
    commands: HashMap<String, CommandCallback>,
    camera_position: DVec3,
    focal_point: DVec3,
    interactor_running: bool,
    animation_playing: bool,
    animation_direction: AnimationDirection,
}

type Shared = Arc<RwLock<StubState>>;

/// A loaded stub module.
pub struct StubModule {
    fs: VirtualFs,
    state: Shared,
    verbosity: Verbosity,
    engine_created: bool,
}

impl StubModule {
    fn new(surface: RenderSurface) -> Self {
        let fs = VirtualFs::new();
        let state = Arc::new(RwLock::new(StubState {
            fs: fs.clone(),
            reader_extensions: Vec::new(),
            window_size: surface.physical_size(),
            options: HashMap::new(),
            loaded: Vec::new(),
            commands: HashMap::new(),
            camera_position: DVec3::new(0.0, 0.0, 5.0),
            focal_point: DVec3::ZERO,
            interactor_running: false,
            animation_playing: false,
            animation_direction: AnimationDirection::default(),
        }));
        Self {
            fs,
            state,
            verbosity: Verbosity::default(),
            engine_created: false,
        }
    }
}

impl EngineModule for StubModule {
    fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    fn autoload_readers(&mut self) {
        let mut state = self.state.write();
        state.reader_extensions = vec![
            ".glb", ".gltf", ".obj", ".stl", ".ply", ".vtp", ".vtu", ".vtk",
        ];
        debug!(
            readers = state.reader_extensions.len(),
            "autoloaded format readers"
        );
    }

    fn create_engine(&mut self) -> Result<Box<dyn EngineInstance>> {
        if self.engine_created {
            return Err(EngineError::Load(
                "engine instance already created for this module".to_string(),
            ));
        }
        self.engine_created = true;
        debug!(verbosity = ?self.verbosity, "engine instance created");
        Ok(Box::new(StubInstance::new(Arc::clone(&self.state))))
    }

    fn load_image(&self, path: &str) -> Result<Box<dyn EngineImage>> {
        let bytes = self.fs.read_file(path)?;
        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| EngineError::Image(format!("{path}: {e}")))?
            .to_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(Box::new(StubImage {
            width,
            height,
            channel_count: 4,
            data: decoded.into_raw(),
            metadata: HashMap::new(),
        }))
    }

    fn new_image(&self, width: u32, height: u32, channel_count: u8) -> Result<Box<dyn EngineImage>> {
        if !(1..=4).contains(&channel_count) {
            return Err(EngineError::Image(format!(
                "unsupported channel count: {channel_count}"
            )));
        }
        let len = width as usize * height as usize * channel_count as usize;
        Ok(Box::new(StubImage {
            width,
            height,
            channel_count,
            data: vec![0; len],
            metadata: HashMap::new(),
        }))
    }

    fn supported_image_formats(&self) -> Vec<String> {
        vec![".png".to_string()]
    }

    fn set_verbosity(&mut self, verbosity: Verbosity) {
        debug!(?verbosity, "module verbosity changed");
        self.verbosity = verbosity;
    }
}

/// Engine instance handle.
struct StubInstance {
    options: StubOptions,
    window: StubWindow,
    scene: StubScene,
    interactor: StubInteractor,
    camera: StubCamera,
}

impl StubInstance {
    fn new(state: Shared) -> Self {
        Self {
            options: StubOptions {
                state: Arc::clone(&state),
            },
            window: StubWindow {
                state: Arc::clone(&state),
            },
            scene: StubScene {
                state: Arc::clone(&state),
            },
            interactor: StubInteractor {
                state: Arc::clone(&state),
            },
            camera: StubCamera { state },
        }
    }
}

impl EngineInstance for StubInstance {
    fn options(&mut self) -> &mut dyn OptionsHandle {
        &mut self.options
    }

    fn window(&mut self) -> &mut dyn WindowHandle {
        &mut self.window
    }

    fn scene(&mut self) -> &mut dyn SceneHandle {
        &mut self.scene
    }

    fn interactor(&mut self) -> &mut dyn InteractorHandle {
        &mut self.interactor
    }

    fn camera(&mut self) -> &mut dyn CameraHandle {
        &mut self.camera
    }
}

struct StubOptions {
    state: Shared,
}

impl OptionsHandle for StubOptions {
    fn set(&mut self, key: &str, value: &str) {
        trace!(key, value, "option set");
        self.state
            .write()
            .options
            .insert(key.to_string(), value.to_string());
    }

    fn get(&self, key: &str) -> Option<String> {
        self.state.read().options.get(key).cloned()
    }

    fn toggle(&mut self, key: &str) -> Result<()> {
        let mut state = self.state.write();
        let flipped = match state.options.get(key).map(String::as_str) {
            None | Some("false") => "true",
            Some("true") => "false",
            Some(other) => {
                return Err(EngineError::Option(format!(
                    "cannot toggle non-boolean option {key}={other}"
                )))
            }
        };
        state.options.insert(key.to_string(), flipped.to_string());
        Ok(())
    }
}

struct StubScene {
    state: Shared,
}

impl SceneHandle for StubScene {
    fn supports(&self, path: &str) -> bool {
        let state = self.state.read();
        let lower = path.to_ascii_lowercase();
        state
            .reader_extensions
            .iter()
            .any(|ext| lower.ends_with(ext))
    }

    fn add(&mut self, path: &str) -> Result<()> {
        if !self.supports(path) {
            return Err(EngineError::Unsupported(path.to_string()));
        }
        let mut state = self.state.write();
        let bytes = state.fs.read_file(path)?;
        let seed = fnv1a(&bytes);
        debug!(path, seed, "scene content loaded");
        state.loaded.push(LoadedContent {
            path: path.to_string(),
            seed,
        });
        Ok(())
    }

    fn clear(&mut self) {
        self.state.write().loaded.clear();
    }
}

struct StubWindow {
    state: Shared,
}

impl WindowHandle for StubWindow {
    fn set_size(&mut self, width: u32, height: u32) {
        trace!(width, height, "window resized");
        self.state.write().window_size = (width, height);
    }

    fn size(&self) -> (u32, u32) {
        self.state.read().window_size
    }

    fn render(&mut self) {
        let state = self.state.read();
        trace!(
            loaded = state.loaded.len(),
            size = ?state.window_size,
            interacting = state.interactor_running,
            "frame rendered"
        );
    }

    fn render_to_image(&mut self, transparent: bool) -> Result<Box<dyn EngineImage>> {
        let state = self.state.read();
        let (width, height) = state.window_size;
        if width == 0 || height == 0 {
            return Err(EngineError::Image("window has zero size".to_string()));
        }

        let background = state
            .options
            .get(BACKGROUND_KEY)
            .and_then(|v| parse_hex_color(v))
            .unwrap_or([0, 0, 0]);
        let background_alpha = if transparent { 0 } else { 255 };

        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..u64::from(width) * u64::from(height) {
            data.extend_from_slice(&[
                background[0],
                background[1],
                background[2],
                background_alpha,
            ]);
        }

        // Each loaded entry paints a centered, content-seeded rectangle.
        // Later entries inset further so stacked content stays visible.
        for (index, content) in state.loaded.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let step = (index as u32) * 2;
            let x0 = (width / 4 + step).min(width / 2);
            let y0 = (height / 4 + step).min(height / 2);
            let x1 = width - x0;
            let y1 = height - y0;
            trace!(path = %content.path, "painting scene content");
            #[allow(clippy::cast_possible_truncation)]
            let base = [
                (content.seed & 0xFF) as u8,
                ((content.seed >> 8) & 0xFF) as u8,
                ((content.seed >> 16) & 0xFF) as u8,
            ];
            for y in y0..y1 {
                for x in x0..x1 {
                    let offset = (y as usize * width as usize + x as usize) * 4;
                    let shade = ((x + y) & 0x1F) as u8;
                    data[offset] = base[0].wrapping_add(shade);
                    data[offset + 1] = base[1].wrapping_add(shade);
                    data[offset + 2] = base[2].wrapping_add(shade);
                    data[offset + 3] = 255;
                }
            }
        }

        Ok(Box::new(StubImage {
            width,
            height,
            channel_count: 4,
            data,
            metadata: HashMap::new(),
        }))
    }

    fn world_from_display(&self, point: [f64; 3]) -> [f64; 3] {
        let state = self.state.read();
        let (width, height) = state.window_size;
        let p = state.camera_position;
        [
            (point[0] - f64::from(width) / 2.0) / DISPLAY_SCALE + p.x,
            (point[1] - f64::from(height) / 2.0) / DISPLAY_SCALE + p.y,
            point[2] + p.z,
        ]
    }

    fn display_from_world(&self, point: [f64; 3]) -> [f64; 3] {
        let state = self.state.read();
        let (width, height) = state.window_size;
        let p = state.camera_position;
        [
            (point[0] - p.x) * DISPLAY_SCALE + f64::from(width) / 2.0,
            (point[1] - p.y) * DISPLAY_SCALE + f64::from(height) / 2.0,
            point[2] - p.z,
        ]
    }
}

struct StubInteractor {
    state: Shared,
}

impl InteractorHandle for StubInteractor {
    fn start(&mut self) {
        self.state.write().interactor_running = true;
    }

    fn stop(&mut self) {
        self.state.write().interactor_running = false;
    }

    fn request_render(&mut self) {
        trace!("render requested");
    }

    fn add_command(&mut self, action: &str, callback: CommandCallback) -> Result<()> {
        let mut state = self.state.write();
        if state.commands.contains_key(action) {
            return Err(EngineError::Command(format!(
                "command already registered: {action}"
            )));
        }
        state.commands.insert(action.to_string(), callback);
        Ok(())
    }

    fn remove_command(&mut self, action: &str) -> Result<()> {
        self.state
            .write()
            .commands
            .remove(action)
            .map(|_| ())
            .ok_or_else(|| EngineError::Command(format!("no such command: {action}")))
    }

    fn command_actions(&self) -> Vec<String> {
        let mut actions: Vec<String> = self.state.read().commands.keys().cloned().collect();
        actions.sort();
        actions
    }

    fn trigger_command(&mut self, command_line: &str) -> Result<()> {
        let mut tokens = command_line.split_whitespace();
        let action = tokens
            .next()
            .ok_or_else(|| EngineError::Command("empty command line".to_string()))?;
        let args: Vec<String> = tokens.map(String::from).collect();

        // Take the callback out while it runs so it may itself use the
        // interactor without deadlocking on the state lock.
        let mut callback = self
            .state
            .write()
            .commands
            .remove(action)
            .ok_or_else(|| EngineError::Command(format!("no such command: {action}")))?;
        let result = callback(&args);
        self.state
            .write()
            .commands
            .insert(action.to_string(), callback);
        result
    }

    fn start_animation(&mut self, direction: AnimationDirection) {
        let mut state = self.state.write();
        trace!(?direction, "animation started");
        state.animation_playing = true;
        state.animation_direction = direction;
    }

    fn stop_animation(&mut self) {
        self.state.write().animation_playing = false;
    }

    fn toggle_animation(&mut self, direction: AnimationDirection) {
        let mut state = self.state.write();
        if state.animation_playing {
            state.animation_playing = false;
        } else {
            state.animation_playing = true;
            state.animation_direction = direction;
        }
    }

    fn is_playing_animation(&self) -> bool {
        self.state.read().animation_playing
    }

    fn animation_direction(&self) -> AnimationDirection {
        self.state.read().animation_direction
    }
}

struct StubCamera {
    state: Shared,
}

impl CameraHandle for StubCamera {
    fn position(&self) -> DVec3 {
        self.state.read().camera_position
    }

    fn set_position(&mut self, position: DVec3) {
        self.state.write().camera_position = position;
    }

    fn focal_point(&self) -> DVec3 {
        self.state.read().focal_point
    }

    fn set_focal_point(&mut self, focal_point: DVec3) {
        self.state.write().focal_point = focal_point;
    }

    fn azimuth(&mut self, degrees: f64) {
        let mut state = self.state.write();
        let rotation = DMat3::from_rotation_y(degrees.to_radians());
        let offset = state.camera_position - state.focal_point;
        state.camera_position = state.focal_point + rotation * offset;
    }

    fn reset_to_bounds(&mut self) {
        let mut state = self.state.write();
        state.camera_position = state.focal_point + DVec3::new(0.0, 0.0, 5.0);
    }
}

/// Raw in-memory image.
pub struct StubImage {
    width: u32,
    height: u32,
    channel_count: u8,
    data: Vec<u8>,
    metadata: HashMap<String, String>,
}

impl EngineImage for StubImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn channel_count(&self) -> u8 {
        self.channel_count
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn compare(&self, other: &dyn EngineImage) -> Result<f64> {
        if (self.width, self.height) != (other.width(), other.height())
            || self.channel_count != other.channel_count()
        {
            return Err(EngineError::Image(format!(
                "image shapes do not match: {}x{}x{} vs {}x{}x{}",
                self.width,
                self.height,
                self.channel_count,
                other.width(),
                other.height(),
                other.channel_count()
            )));
        }

        let total: u64 = self
            .data
            .iter()
            .zip(other.data())
            .map(|(a, b)| u64::from(a.abs_diff(*b)))
            .sum();
        let max = self.data.len() as u64 * 255;
        if max == 0 {
            return Ok(0.0);
        }
        #[allow(clippy::cast_precision_loss)]
        Ok(total as f64 / max as f64)
    }

    fn save(&self, fs: &VirtualFs, path: &str) -> Result<()> {
        fs.write_file(path, self.to_png()?);
        Ok(())
    }

    fn to_png(&self) -> Result<Vec<u8>> {
        let color = match self.channel_count {
            1 => ExtendedColorType::L8,
            2 => ExtendedColorType::La8,
            3 => ExtendedColorType::Rgb8,
            4 => ExtendedColorType::Rgba8,
            other => {
                return Err(EngineError::Image(format!(
                    "unsupported channel count: {other}"
                )))
            }
        };
        let mut buffer = Cursor::new(Vec::new());
        PngEncoder::new(&mut buffer)
            .write_image(&self.data, self.width, self.height, color)
            .map_err(|e| EngineError::Image(e.to_string()))?;
        Ok(buffer.into_inner())
    }

    fn normalized_pixel(&self, x: u32, y: u32) -> Result<Vec<f64>> {
        if x >= self.width || y >= self.height {
            return Err(EngineError::Image(format!(
                "pixel ({x}, {y}) out of bounds for {}x{}",
                self.width, self.height
            )));
        }
        let channels = self.channel_count as usize;
        let offset = (y as usize * self.width as usize + x as usize) * channels;
        Ok(self.data[offset..offset + channels]
            .iter()
            .map(|&v| f64::from(v) / 255.0)
            .collect())
    }

    fn set_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    fn metadata(&self, key: &str) -> Option<String> {
        self.metadata.get(key).cloned()
    }

    fn all_metadata(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.metadata.keys().cloned().collect();
        keys.sort();
        keys
    }
}

/// FNV-1a over the staged content bytes.
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Parse a `#RRGGBB` color string.
fn parse_hex_color(value: &str) -> Option<[u8; 3]> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use prism_core::num_array_equals;

    fn loaded_module() -> StubModule {
        let surface = RenderSurface::new(64, 64);
        StubModule::new(surface)
    }

    #[test]
    fn supports_requires_autoload() {
        let mut module = loaded_module();
        let mut engine = module.create_engine().unwrap();
        assert!(!engine.scene().supports("model.glb"));
    }

    #[test]
    fn second_engine_instance_is_rejected() {
        let mut module = loaded_module();
        let _engine = module.create_engine().unwrap();
        assert!(module.create_engine().is_err());
    }

    #[test]
    fn add_requires_staged_bytes() {
        let mut module = loaded_module();
        module.autoload_readers();
        let mut engine = module.create_engine().unwrap();
        assert!(engine.scene().supports("model.glb"));
        assert!(engine.scene().add("model.glb").is_err());
    }

    #[test]
    fn render_is_deterministic_per_content() {
        let mut module = loaded_module();
        module.fs().write_file("a.glb", vec![1, 2, 3]);
        module.autoload_readers();
        let mut engine = module.create_engine().unwrap();
        engine.scene().add("a.glb").unwrap();

        let first = engine.window().render_to_image(true).unwrap();
        let second = engine.window().render_to_image(true).unwrap();
        assert_relative_eq!(first.compare(second.as_ref()).unwrap(), 0.0);
    }

    #[test]
    fn different_content_renders_differently() {
        let render = |bytes: Vec<u8>| {
            let mut module = loaded_module();
            module.fs().write_file("a.glb", bytes);
            module.autoload_readers();
            let mut engine = module.create_engine().unwrap();
            engine.scene().add("a.glb").unwrap();
            engine.window().render_to_image(true).unwrap()
        };
        let a = render(vec![1, 2, 3]);
        let b = render(vec![9, 9, 9, 9]);
        assert!(a.compare(b.as_ref()).unwrap() > 0.0);
    }

    #[test]
    fn background_option_changes_output() {
        let mut module = loaded_module();
        module.autoload_readers();
        let mut engine = module.create_engine().unwrap();
        let black = engine.window().render_to_image(false).unwrap();
        engine.options().set(BACKGROUND_KEY, "#ff0000");
        let red = engine.window().render_to_image(false).unwrap();
        assert!(black.compare(red.as_ref()).unwrap() > 0.0);
        assert_eq!(red.normalized_pixel(0, 0).unwrap(), vec![1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn compare_rejects_shape_mismatch() {
        let module = loaded_module();
        let a = module.new_image(4, 4, 4).unwrap();
        let b = module.new_image(5, 4, 4).unwrap();
        assert!(a.compare(b.as_ref()).is_err());
    }

    #[test]
    fn png_round_trip() {
        let module = loaded_module();
        let mut img = module.new_image(3, 2, 4).unwrap();
        img.set_metadata("Author", "Jane Doe");
        assert_eq!(img.metadata("Author").as_deref(), Some("Jane Doe"));
        assert_eq!(img.all_metadata(), vec!["Author".to_string()]);

        let png = img.to_png().unwrap();
        assert_eq!(&png[0..4], &[137, 80, 78, 71]);

        module.fs().write_file("img.png", png);
        let loaded = module.load_image("img.png").unwrap();
        assert_relative_eq!(img.compare(loaded.as_ref()).unwrap(), 0.0);
    }

    #[test]
    fn display_world_round_trip() {
        let mut module = loaded_module();
        let mut engine = module.create_engine().unwrap();
        let window = engine.window();

        let world = window.world_from_display([0.0, 0.0, 0.0]);
        assert!(!num_array_equals(&world, &[0.0, 0.0, 0.0], 0.001));

        let display = window.display_from_world(world);
        assert!(num_array_equals(&display, &[0.0, 0.0, 0.0], 0.001));
    }

    #[test]
    fn command_registry() {
        let mut module = loaded_module();
        let mut engine = module.create_engine().unwrap();
        let interactor = engine.interactor();

        let seen = Arc::new(RwLock::new(Vec::new()));
        let sink = Arc::clone(&seen);
        interactor
            .add_command(
                "foo",
                Box::new(move |args| {
                    sink.write().extend_from_slice(args);
                    Ok(())
                }),
            )
            .unwrap();

        assert_eq!(interactor.command_actions(), vec!["foo".to_string()]);
        interactor.trigger_command("foo bar baz").unwrap();
        assert_eq!(*seen.read(), vec!["bar".to_string(), "baz".to_string()]);

        interactor.remove_command("foo").unwrap();
        assert!(interactor.command_actions().is_empty());
        assert!(interactor.trigger_command("foo").is_err());
    }

    #[test]
    fn animation_playback_controls() {
        let mut module = loaded_module();
        let mut engine = module.create_engine().unwrap();
        let interactor = engine.interactor();

        assert!(!interactor.is_playing_animation());

        interactor.start_animation(AnimationDirection::default());
        assert!(interactor.is_playing_animation());
        assert_eq!(interactor.animation_direction(), AnimationDirection::Forward);

        interactor.stop_animation();
        assert!(!interactor.is_playing_animation());

        interactor.start_animation(AnimationDirection::Backward);
        assert!(interactor.is_playing_animation());
        assert_eq!(
            interactor.animation_direction(),
            AnimationDirection::Backward
        );
        interactor.stop_animation();

        // toggle starts from stopped, in the requested direction
        interactor.toggle_animation(AnimationDirection::Forward);
        assert!(interactor.is_playing_animation());
        assert_eq!(interactor.animation_direction(), AnimationDirection::Forward);

        // toggle while playing stops, whatever direction is asked for
        interactor.toggle_animation(AnimationDirection::Backward);
        assert!(!interactor.is_playing_animation());

        interactor.toggle_animation(AnimationDirection::Backward);
        assert!(interactor.is_playing_animation());
        assert_eq!(
            interactor.animation_direction(),
            AnimationDirection::Backward
        );
    }

    #[test]
    fn supported_image_formats_include_png() {
        let module = loaded_module();
        assert!(module
            .supported_image_formats()
            .contains(&".png".to_string()));
    }

    #[test]
    fn interactor_loop_and_verbosity_smoke() {
        let mut module = loaded_module();
        module.set_verbosity(Verbosity::Quiet);
        let mut engine = module.create_engine().unwrap();
        let interactor = engine.interactor();
        interactor.start();
        interactor.request_render();
        interactor.stop();
    }

    #[test]
    fn camera_azimuth_orbits_focal_point() {
        let mut module = loaded_module();
        let mut engine = module.create_engine().unwrap();
        let camera = engine.camera();

        camera.azimuth(180.0);
        let p = camera.position();
        assert_relative_eq!(p.z, -5.0, epsilon = 1e-9);

        camera.reset_to_bounds();
        assert_relative_eq!(camera.position().z, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn toggle_option_semantics() {
        let mut module = loaded_module();
        let mut engine = module.create_engine().unwrap();
        let options = engine.options();

        options.toggle("ui.axis").unwrap();
        assert_eq!(options.get("ui.axis").as_deref(), Some("true"));
        options.toggle("ui.axis").unwrap();
        assert_eq!(options.get("ui.axis").as_deref(), Some("false"));

        options.set("scene.up_direction", "+Z");
        assert!(options.toggle("scene.up_direction").is_err());
    }
}
