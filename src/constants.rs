/// Application-wide constants for canvas synthesis, resampling, and packaging

pub mod canvas {
    /// Edge length of the square base canvas in pixels
    pub const BASE_SIZE: u32 = 1024;

    /// Radius of the corner accent discs on the 1024px design
    pub const CORNER_RADIUS: u32 = 180;

    /// Glyph point size on the 1024px canvas
    pub const GLYPH_SIZE: f32 = 600.0;

    /// Vertical lift applied to the glyph above true center
    /// Capital letters carry most of their weight below the cap line,
    /// so the glyph sits 50px high on the 1024px canvas
    pub const GLYPH_LIFT: i64 = 50;
}

pub mod sizes {
    /// PNG output resolutions emitted by the icon generator, largest first
    pub const PNG_SIZES: &[u32] = &[1024, 512, 256];

    /// Resolutions computed for Windows ICO packaging
    pub const ICO_SIZES: &[u32] = &[16, 32, 48, 64, 128, 256];

    /// The single resolution embedded in the shipped .ico file
    pub const ICO_EMBED_SIZE: u32 = 256;
}

pub mod paths {
    /// Default directory for generated artifacts, relative to the working directory
    pub const OUTPUT_DIR: &str = "build";

    /// Base raster consumed by the ICO packager
    pub const BASE_ICON_FILE: &str = "icon-1024.png";

    /// Name of the packaged Windows icon
    pub const ICO_FILE: &str = "icon.ico";

    /// Optional settings file consulted by both tools
    pub const CONFIG_FILE: &str = "icon.yaml";

    /// Candidate font files for the glyph, tried in order.
    /// Unreadable entries are skipped; the built-in block glyph covers the rest.
    pub const FONT_CANDIDATES: &[&str] = &[
        "/System/Library/Fonts/Helvetica.ttc",
        "/System/Library/Fonts/HelveticaNeue.ttc",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
        "C:\\Windows\\Fonts\\arialbd.ttf",
    ];
}
