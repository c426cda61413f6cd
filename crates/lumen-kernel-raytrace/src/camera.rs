//! Primary rays from a pinhole camera.
//!
//! The camera looks down its frame's -z axis. `image_uv` is in `[0, 1]^2`
//! with `v` growing downward, so `(0, 0)` is the top-left of the image.

use lumen_kernel_math::{Frame3, Point3, Vec2, Vec3};

use crate::Ray;

/// Ray through `image_uv` for a camera with focal length `lens` and film
/// size `film`.
///
/// The origin is the frame's translation and the direction points from the
/// film sample through the lens center. `lens` is expected to be positive;
/// with a zero lens the center sample has no direction and looks down -z.
pub fn camera_ray(frame: &Frame3, lens: f32, film: &Vec2, image_uv: &Vec2) -> Ray {
    if lens <= 0.0 {
        log::debug!("camera_ray with non-positive lens {lens}");
    }
    let q = Vec3::new(
        film.x * (0.5 - image_uv.x),
        film.y * (image_uv.y - 0.5),
        lens,
    );
    let d = (-q).try_normalize(0.0).unwrap_or(-Vec3::z());
    Ray::new(
        frame.transform_point(&Point3::origin()),
        frame.transform_direction(&d),
    )
}

/// Film size for an `aspect` ratio whose larger side is `film`.
pub fn film_from_aspect(aspect: f32, film: f32) -> Vec2 {
    if aspect >= 1.0 {
        Vec2::new(film, film / aspect)
    } else {
        Vec2::new(film * aspect, film)
    }
}

/// Like [`camera_ray`], with the film size derived from an aspect ratio and
/// its larger side.
pub fn camera_ray_aspect(frame: &Frame3, lens: f32, aspect: f32, film: f32, image_uv: &Vec2) -> Ray {
    camera_ray(frame, lens, &film_from_aspect(aspect, film), image_uv)
}
