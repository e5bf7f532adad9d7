use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::FilterType;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Terminal cells the logo occupies. Each cell shows two image pixels stacked
/// with the upper half block, so the image is scaled to twice as many rows.
pub const LOGO_COLUMNS: u16 = 12;
pub const LOGO_ROWS: u16 = 6;

/// Upper half block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: &str = "\u{2580}";

/// The header logo, pre-scaled into terminal cells.
#[derive(Debug, Clone)]
pub struct Logo {
    cells: Vec<Vec<(Color, Color)>>,
}

impl Logo {
    /// Load the logo if possible. A missing or undecodable file is logged and
    /// the header simply renders without it.
    pub fn load(path: &Path) -> Option<Logo> {
        match Self::decode(path) {
            Ok(logo) => Some(logo),
            Err(err) => {
                log::warn!("logo not found or failed to load: {err:#}");
                None
            }
        }
    }

    fn decode(path: &Path) -> Result<Logo> {
        let image = image::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?
            .resize_exact(
                LOGO_COLUMNS as u32,
                LOGO_ROWS as u32 * 2,
                FilterType::Triangle,
            )
            .to_rgb8();

        let pixel = |x: u32, y: u32| {
            let [r, g, b] = image.get_pixel(x, y).0;
            Color::Rgb(r, g, b)
        };

        let cells = (0..LOGO_ROWS as u32)
            .map(|row| {
                (0..LOGO_COLUMNS as u32)
                    .map(|col| (pixel(col, row * 2), pixel(col, row * 2 + 1)))
                    .collect()
            })
            .collect();
        Ok(Logo { cells })
    }

    pub fn width(&self) -> u16 {
        self.cells.first().map_or(0, |row| row.len() as u16)
    }

    pub fn height(&self) -> u16 {
        self.cells.len() as u16
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        self.cells
            .iter()
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|(top, bottom)| {
                            Span::styled(HALF_BLOCK, Style::default().fg(*top).bg(*bottom))
                        })
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }
}
