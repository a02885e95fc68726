//! Caller options and the subset forwarded to the core renderers.

use plot_common::Color;
use renderer::{ArtistStyle, PlotKwargs, Surface};

/// Options accepted by every plotting entry point.
///
/// `surface` and `logo` are consumed by the pipeline itself; everything else
/// is forwarded to the core render.
#[derive(Debug, Clone, Default)]
pub struct PlotOptions {
    /// Surface to draw on; the context's current surface when absent
    pub surface: Option<Surface>,
    /// Stamp the credit mark after drawing; on when absent
    pub logo: Option<bool>,
    /// Timeseries legend labels, one per array
    pub labels: Option<Vec<String>>,
    pub x: Option<String>,
    pub y: Option<String>,
    pub style: ArtistStyle,
}

impl PlotOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surface(mut self, surface: &Surface) -> Self {
        self.surface = Some(surface.clone());
        self
    }

    pub fn logo(mut self, logo: bool) -> Self {
        self.logo = Some(logo);
        self
    }

    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn x(mut self, name: impl Into<String>) -> Self {
        self.x = Some(name.into());
        self
    }

    pub fn y(mut self, name: impl Into<String>) -> Self {
        self.y = Some(name.into());
        self
    }

    pub fn cmap(mut self, name: impl Into<String>) -> Self {
        self.style.cmap = Some(name.into());
        self
    }

    pub fn vmin(mut self, value: f64) -> Self {
        self.style.vmin = Some(value);
        self
    }

    pub fn vmax(mut self, value: f64) -> Self {
        self.style.vmax = Some(value);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn line_width(mut self, width: f32) -> Self {
        self.style.line_width = Some(width);
        self
    }

    /// Split off the logo flag and bind the resolved surface.
    ///
    /// Any surface still held by the options is dropped in favor of
    /// `surface`.
    pub fn into_render(self, surface: Surface) -> (bool, RenderOptions) {
        let logo = self.logo.unwrap_or(true);
        let render = RenderOptions {
            surface,
            labels: self.labels,
            x: self.x,
            y: self.y,
            style: self.style,
        };
        (logo, render)
    }
}

/// What a core render receives. There is no logo flag here.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub surface: Surface,
    pub labels: Option<Vec<String>>,
    pub x: Option<String>,
    pub y: Option<String>,
    pub style: ArtistStyle,
}

impl RenderOptions {
    /// Fill in coordinate names the caller left unset.
    pub fn with_default_axes(mut self, x: Option<&str>, y: Option<&str>) -> Self {
        if self.x.is_none() {
            self.x = x.map(String::from);
        }
        if self.y.is_none() {
            self.y = y.map(String::from);
        }
        self
    }

    /// Keyword arguments for one `plot_array` call.
    pub fn kwargs(&self, label: Option<String>) -> PlotKwargs {
        PlotKwargs {
            x: self.x.clone(),
            y: self.y.clone(),
            transform: None,
            label,
            style: self.style.clone(),
        }
    }
}
