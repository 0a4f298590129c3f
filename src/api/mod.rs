pub mod bead_colors;
pub mod bead_preview;
pub mod palettes;
pub mod pixelate;
pub mod shared;

pub use bead_colors::{
    handle_bead_colors, handle_bead_colors_csv, BeadColorsRequest, __path_handle_bead_colors,
    __path_handle_bead_colors_csv,
};
pub use bead_preview::{
    handle_bead_preview, BeadPreviewRequest, BeadPreviewResponse, __path_handle_bead_preview,
};
pub use palettes::{
    handle_import_palette, handle_list_palettes, NamedPalette, PaletteImportResponse,
    PaletteListResponse, __path_handle_import_palette, __path_handle_list_palettes,
};
pub use pixelate::{handle_pixelate, PixelateRequest, PixelateResponse, __path_handle_pixelate};
pub use shared::{BeadColor, BeadColorsResponse, GridSizeResponse};
