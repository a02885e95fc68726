//! Resolution of the drawing surface a plot goes to.

use renderer::Surface;

pub use renderer::CurrentSurface;

/// Use the given surface, or fall back to the context's current one.
///
/// Falling back is allowed but logged, since it draws onto shared state the
/// caller did not name.
pub fn resolve_surface<C>(surface: Option<Surface>, context: &mut C) -> Surface
where
    C: CurrentSurface + ?Sized,
{
    match surface {
        Some(surface) => surface,
        None => {
            warn_fallback();
            context.current_surface()
        }
    }
}

/// Use the given surface, or the context's current one if it already has
/// one. Never creates a surface, so a plot that rejects the fallback leaves
/// the context untouched.
pub fn resolve_existing_surface<C>(surface: Option<Surface>, context: &C) -> Option<Surface>
where
    C: CurrentSurface + ?Sized,
{
    match surface {
        Some(surface) => Some(surface),
        None => {
            warn_fallback();
            context.existing_surface()
        }
    }
}

fn warn_fallback() {
    tracing::warn!("No surface supplied, using the current surface of the plotting context");
}
