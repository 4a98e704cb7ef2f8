use crate::layout::font_metrics::FontFace;

/// Page dimensions, margins, and typographic constants for generated documents.
///
/// All values are in PDF points (1/72 inch). The vertical axis grows upwards,
/// so the layout cursor starts high and decreases as lines are placed.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    pub width_pt: f32,
    pub height_pt: f32,
    pub margin_left_pt: f32,
    pub margin_right_pt: f32,
    pub margin_top_pt: f32,
    pub margin_bottom_pt: f32,

    pub title_face: FontFace,
    pub title_size_pt: f32,
    pub subtitle_face: FontFace,
    pub subtitle_size_pt: f32,
    pub body_face: FontFace,
    pub body_size_pt: f32,
    /// Fixed vertical advance per body line, independent of ascent/descent.
    pub line_height_pt: f32,

    /// Drop from the title baseline to the subtitle (or separator) baseline.
    pub title_gap_pt: f32,
    /// Drop from the subtitle baseline to the separator.
    pub subtitle_gap_pt: f32,
    /// Drop from the separator to the first body line.
    pub separator_gap_pt: f32,
    /// Offset below the top margin where continuation pages start.
    pub continuation_offset_pt: f32,
}

impl PageGeometry {
    /// Horizontal budget for wrapped text.
    pub fn usable_width(&self) -> f32 {
        self.width_pt - self.margin_left_pt - self.margin_right_pt
    }

    /// Baseline of the title on the first page.
    pub fn title_baseline(&self) -> f32 {
        self.height_pt - self.margin_top_pt
    }

    /// Cursor position where body text resumes after a page break.
    pub fn continuation_start(&self) -> f32 {
        self.height_pt - self.margin_top_pt - self.continuation_offset_pt
    }

    /// Body lines that fit on a continuation page.
    pub fn lines_per_continuation_page(&self) -> usize {
        let span = self.continuation_start() - self.margin_bottom_pt - self.line_height_pt;
        if span < 0.0 {
            return 0;
        }
        (span / self.line_height_pt).floor() as usize + 1
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        letter_geometry()
    }
}

/// US letter (8.5" × 11"), 1" margins, Helvetica 11pt body on 14pt leading,
/// Helvetica-Bold 16pt title, Helvetica 12pt subtitle.
pub fn letter_geometry() -> PageGeometry {
    PageGeometry {
        width_pt: 612.0,
        height_pt: 792.0,
        margin_left_pt: 72.0,
        margin_right_pt: 72.0,
        margin_top_pt: 72.0,
        margin_bottom_pt: 72.0,
        title_face: FontFace::HelveticaBold,
        title_size_pt: 16.0,
        subtitle_face: FontFace::Helvetica,
        subtitle_size_pt: 12.0,
        body_face: FontFace::Helvetica,
        body_size_pt: 11.0,
        line_height_pt: 14.0,
        title_gap_pt: 25.0,
        subtitle_gap_pt: 20.0,
        separator_gap_pt: 30.0,
        continuation_offset_pt: 30.0,
    }
}
