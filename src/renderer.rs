//! Frame rendering: one primary ray per pixel, fanned out across CPU cores.

use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::color::{self, Color};
use crate::integrator::Integrator;

/// Frame buffer with channel values in [0, 255].
pub type Frame = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Final color of pixel (x, y).
///
/// Stateless: depends only on the camera and the integrator's read-only
/// scene, light and skybox, so pixels can be evaluated in any order.
pub fn render_pixel(camera: &Camera, integrator: &Integrator<'_>, x: u32, y: u32) -> Color {
    let r = camera.cast_ray(x, y);
    color::clamp_channels(integrator.trace(&r))
}

/// Renders one frame.
///
/// Pixels are processed in parallel with Rayon; `progress` shows a terminal
/// progress bar while the frame is generated.
pub fn render(camera: &Camera, integrator: &Integrator<'_>, progress: bool) -> Frame {
    let mut image: Frame = ImageBuffer::new(camera.image_width, camera.image_height);

    info!("Generating image using {} CPU cores...", rayon::current_num_threads());
    let generation_start = std::time::Instant::now();
    let pb = if progress {
        let pb = ProgressBar::new(camera.image_width as u64 * camera.image_height as u64);
        if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}") {
            pb.set_style(style);
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    image.enumerate_pixels_mut().par_bridge().for_each(|(x, y, pixel)| {
        let c = render_pixel(camera, integrator, x, y);
        *pixel = Rgb([c.x, c.y, c.z]);
        pb.inc(1);
    });

    pb.finish_and_clear();
    info!("Image generated in {:.2?}", generation_start.elapsed());

    image
}
