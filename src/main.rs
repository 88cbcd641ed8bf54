//! Hyperwire - tesseract wireframe animation
//!
//! Drives the geometry engine from a fixed-interval tick and presents each
//! frame through the wgpu wireframe pipeline.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use hyperwire::config::AppConfig;
use hyperwire_geom::{Engine, EngineParams};
use hyperwire_render::{edge_vertices, RenderContext, WirePipeline};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    /// The geometry engine; owns the clock and the canonical hypercube
    engine: Engine,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    wire_pipeline: Option<WirePipeline>,
    /// Deadline for the next clock tick
    next_tick: Instant,
    tick_interval: Duration,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        let params: EngineParams = config.engine_params();
        let engine = Engine::new(params);

        log::info!(
            "Engine ready: {} vertices, {} edges, time step {}",
            engine.hypercube().vertices().len(),
            engine.hypercube().edges().len(),
            params.time_step,
        );

        let tick_interval = Duration::from_millis(config.animation.frame_interval_ms);

        Self {
            config,
            engine,
            window: None,
            render_context: None,
            wire_pipeline: None,
            next_tick: Instant::now(),
            tick_interval,
        }
    }

    fn background_color(&self) -> wgpu::Color {
        let bg = &self.config.rendering.background_color;
        wgpu::Color {
            r: bg[0] as f64,
            g: bg[1] as f64,
            b: bg[2] as f64,
            a: bg[3] as f64,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title(&self.config.window.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            // Create render context and the wireframe pipeline
            let render_context = pollster::block_on(RenderContext::new(window.clone()));
            let wire_pipeline =
                WirePipeline::new(&render_context.device, render_context.config.format);

            log::info!(
                "Surface ready at {}x{}",
                render_context.config.width,
                render_context.config.height
            );

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.wire_pipeline = Some(wire_pipeline);
            self.next_tick = Instant::now() + self.tick_interval;
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Fixed-interval tick: advance the clock and schedule a repaint.
        // Drawing itself happens in RedrawRequested.
        let now = Instant::now();
        if now >= self.next_tick {
            self.engine.advance();
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            // Reschedule from now: a stalled loop slows the animation down
            // instead of fast-forwarding through the missed ticks
            self.next_tick = now + self.tick_interval;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(KeyCode::Escape) = event.physical_key {
                    if event.state == ElementState::Pressed {
                        event_loop.exit();
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let clear_color = self.background_color();
                let (Some(ctx), Some(pipeline)) =
                    (&mut self.render_context, &mut self.wire_pipeline)
                else {
                    return;
                };

                // Recompute the whole frame for the current surface size
                let (width, height) = ctx.surface_size();
                let frame = self.engine.frame(width, height);
                let vertices = edge_vertices(
                    &frame,
                    self.engine.hypercube(),
                    self.engine.fade(),
                    self.config.rendering.line_width,
                    self.config.rendering.edge_color,
                );
                pipeline.upload(&ctx.queue, &vertices, width, height);

                // Get surface texture
                let output = match ctx.surface.get_current_texture() {
                    Ok(output) => output,
                    Err(wgpu::SurfaceError::Lost) => {
                        ctx.resize(ctx.size);
                        if let Some(window) = &self.window {
                            window.request_redraw();
                        }
                        return;
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        event_loop.exit();
                        return;
                    }
                    Err(e) => {
                        log::warn!("Surface error: {:?}", e);
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                let mut encoder = ctx
                    .device
                    .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                        label: Some("Wire Encoder"),
                    });

                pipeline.render(&mut encoder, &view, clear_color);

                ctx.queue.submit(std::iter::once(encoder.finish()));
                output.present();
            }

            _ => {}
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting Hyperwire");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");

    // Create and run application
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
