use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window as WinitWindow, WindowId},
};

use rt_viewer::cli::Cli;
use rt_viewer::core::{Button, Controller, WinitController};
use rt_viewer::frame::{FpsCounter, FrameIterator};
use rt_viewer::renderer::RayTracer;
use rt_viewer::window::Window;
use rt_viewer::{CameraController, ViewerConfig};

struct App {
    config: ViewerConfig,
    window: Option<Window>,
    raytracer: Option<RayTracer>,
    camera: CameraController,
    input: WinitController,
    frames: FrameIterator,
    fps: FpsCounter,
    startup_error: Option<anyhow::Error>,
}

impl App {
    fn new(config: ViewerConfig) -> Self {
        let origin = config.pointer_origin();
        Self {
            camera: CameraController::new(config.camera_settings(), origin),
            input: WinitController::new(origin, config.grab_cursor),
            config,
            window: None,
            raytracer: None,
            frames: FrameIterator::new(),
            fps: FpsCounter::new(),
            startup_error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = WinitWindow::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.width,
                self.config.height,
            ));
        let window = Window::new(Arc::new(
            event_loop
                .create_window(attributes)
                .context("Failed to create window")?,
        ));

        if self.config.grab_cursor && !window.grab_cursor() {
            self.input.set_cursor_grabbed(false);
        }

        let raytracer = pollster::block_on(RayTracer::new(
            window.inner().clone(),
            &self.camera.publish(),
        ))
        .context("Failed to initialize ray tracer")?;

        log::info!("Window created: {}x{}", window.inner_size().width, window.inner_size().height);
        let settings = self.camera.settings();
        log::info!(
            "Camera: move speed {}, rotate speed {}, up {:?}",
            settings.move_speed,
            settings.rotate_speed,
            settings.up_mode
        );

        self.window = Some(window);
        self.raytracer = Some(raytracer);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if self.input.is_down(Button::Exit) {
            event_loop.exit();
            return;
        }

        let Some(frame) = self.frames.next() else {
            return;
        };
        if let Some(fps) = self.fps.tick(frame.delta) {
            log::debug!("FPS: {:.1}", fps);
        }

        // Pointer samples since the last frame were applied as they arrived
        self.camera.translate(&self.input);
        let snapshot = self.camera.publish();
        log::trace!(
            "frame {}: location {:?} look_at {:?} vup {:?}",
            frame.number,
            snapshot.location,
            snapshot.look_at,
            snapshot.vup
        );

        let Some(raytracer) = &mut self.raytracer else {
            return;
        };
        match raytracer.render(&snapshot, frame.time) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                raytracer.reconfigure();
            }
            Err(wgpu::SurfaceError::Timeout) => log::warn!("Surface timeout, skipping frame"),
            Err(e) => {
                log::error!("Render error: {}", e);
                event_loop.exit();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                log::error!("{:#}", e);
                self.startup_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(raytracer) = &mut self.raytracer {
                    raytracer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            event => {
                if let Some((x, y)) = self.input.process_event(&event) {
                    self.camera.rotate(x, y);
                }
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let Some((x, y)) = self.input.process_device_event(&event) {
            self.camera.rotate(x, y);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ViewerConfig::from_cli(&cli)?;
    log::info!(
        "Config: {}x{} \"{}\", grab cursor {}",
        config.width,
        config.height,
        config.title,
        config.grab_cursor
    );

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(config);

    log::info!("Controls: WASD to move, mouse to look, Escape to quit");
    event_loop.run_app(&mut app)?;

    match app.startup_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
