use anyhow::Result;
use glowquad_engine::core::{App, AppControl, FrameCtx, ReadyCtx};
use glowquad_engine::render::{FrameState, QuadConfig, QuadRenderer};
use glowquad_engine::scene::{self, Camera, Drift, LightUniform, Spin, TransformUniform};

/// Clear color behind the quad.
const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.2,
    b: 0.25,
    a: 1.0,
};

/// Seconds between FPS log lines.
const FPS_LOG_INTERVAL: f32 = 5.0;

/// The rotating-quad application.
///
/// Owns the animation steppers and the renderer. Per frame it advances the
/// spin and drift by their fixed steps, rebuilds the transform block, and
/// re-uploads the (static) light block alongside it.
pub struct QuadApp {
    spin: Spin,
    drift: Drift,
    camera: Camera,
    renderer: Option<QuadRenderer>,

    fps_accum: f32,
    fps_frames: u32,
}

impl QuadApp {
    pub fn new() -> Self {
        Self {
            spin: Spin::new(),
            drift: Drift::new(),
            camera: Camera::default(),
            renderer: None,
            fps_accum: 0.0,
            fps_frames: 0,
        }
    }
}

impl App for QuadApp {
    fn on_ready(&mut self, ctx: &mut ReadyCtx<'_, '_>) -> Result<()> {
        let rctx = ctx.render_ctx();
        self.renderer = Some(QuadRenderer::new(&rctx, &QuadConfig::default())?);

        log::info!(
            "scene ready: {}×{} surface, {:?}",
            rctx.size.width,
            rctx.size.height,
            rctx.surface_format
        );

        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // Fixed per-frame increments; the loop is unlocked, so these are the
        // animation's only notion of time.
        let angle = self.spin.advance();
        let offset = self.drift.advance();

        self.fps_accum += ctx.time.dt;
        self.fps_frames += 1;
        if self.fps_accum >= FPS_LOG_INTERVAL {
            log::debug!(
                "{:.0} fps (frame {})",
                self.fps_frames as f32 / self.fps_accum,
                ctx.time.frame_index
            );
            self.fps_accum = 0.0;
            self.fps_frames = 0;
        }

        let Some(renderer) = self.renderer.as_ref() else {
            debug_assert!(false, "on_frame before on_ready");
            return AppControl::Exit;
        };

        let camera = &self.camera;
        ctx.render(BACKGROUND, |rctx, target| {
            let frame = FrameState {
                transform: TransformUniform::new(
                    scene::transform::world(angle, offset),
                    camera.view(),
                    camera.projection(rctx.aspect_ratio()),
                ),
                light: LightUniform::fixed(),
            };
            renderer.render(rctx, target, &frame);
        })
    }
}
