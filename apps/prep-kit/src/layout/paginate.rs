//! Pagination — lays a plain-text body out into fixed-size pages.
//!
//! # Layout rules
//! - Page 1 carries the title, the optional subtitle, and a separator rule.
//!   Continuation pages carry body text only.
//! - Every source line (split on newlines) is wrapped with `wrap_line`.
//!   A blank source line advances the cursor by one line height.
//! - Before each source line and each wrapped line, if placing it would push
//!   the cursor below the bottom margin, a new page starts. A wrapped line is
//!   never split across pages.
//!
//! All mutable state lives in a `RenderContext` owned by a single
//! `paginate` call, so the produced layout depends only on its inputs.

use crate::layout::font_metrics::{get_metrics, FontFace};
use crate::layout::geometry::PageGeometry;
use crate::layout::wrap::wrap_line;

// ────────────────────────────────────────────────────────────────────────────
// Page model
// ────────────────────────────────────────────────────────────────────────────

/// A run of text drawn at a baseline position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub x: f32,
    pub y: f32,
    pub face: FontFace,
    pub size_pt: f32,
    pub text: String,
}

/// A horizontal stroke from `x1` to `x2` at height `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleLine {
    pub x1: f32,
    pub x2: f32,
    pub y: f32,
}

/// Everything drawn on one page, in drawing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub texts: Vec<PlacedText>,
    pub rules: Vec<RuleLine>,
}

/// The complete laid-out document. Always holds at least one page.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub geometry: PageGeometry,
    pub pages: Vec<PageLayout>,
}

impl DocumentLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Iterates over every placed text run, tagged with its 0-based page index.
    pub fn texts(&self) -> impl Iterator<Item = (usize, &PlacedText)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(i, page)| page.texts.iter().map(move |t| (i, t)))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Render context
// ────────────────────────────────────────────────────────────────────────────

/// Mutable cursor state for one layout pass.
struct RenderContext<'a> {
    geometry: &'a PageGeometry,
    finished: Vec<PageLayout>,
    page: PageLayout,
    cursor_y: f32,
    face: FontFace,
    size_pt: f32,
}

impl<'a> RenderContext<'a> {
    fn new(geometry: &'a PageGeometry) -> Self {
        Self {
            geometry,
            finished: Vec::new(),
            page: PageLayout::default(),
            cursor_y: geometry.title_baseline(),
            face: geometry.body_face,
            size_pt: geometry.body_size_pt,
        }
    }

    fn set_font(&mut self, face: FontFace, size_pt: f32) {
        self.face = face;
        self.size_pt = size_pt;
    }

    fn draw(&mut self, x: f32, y: f32, text: &str) {
        self.page.texts.push(PlacedText {
            x,
            y,
            face: self.face,
            size_pt: self.size_pt,
            text: text.to_string(),
        });
    }

    fn draw_header(&mut self, title: &str, subtitle: Option<&str>) {
        let g = self.geometry;
        let x = g.margin_left_pt;

        self.set_font(g.title_face, g.title_size_pt);
        self.draw(x, g.title_baseline(), title);
        self.cursor_y = g.title_baseline() - g.title_gap_pt;

        if let Some(subtitle) = subtitle.filter(|s| !s.is_empty()) {
            self.set_font(g.subtitle_face, g.subtitle_size_pt);
            self.draw(x, self.cursor_y, subtitle);
            self.cursor_y -= g.subtitle_gap_pt;
        }

        self.page.rules.push(RuleLine {
            x1: x,
            x2: g.width_pt - g.margin_right_pt,
            y: self.cursor_y,
        });
        self.cursor_y -= g.separator_gap_pt;

        self.set_font(g.body_face, g.body_size_pt);
    }

    /// Starts a new page if one more line would cross the bottom margin.
    fn ensure_room(&mut self) {
        let g = self.geometry;
        if self.cursor_y - g.line_height_pt < g.margin_bottom_pt {
            self.finished.push(std::mem::take(&mut self.page));
            self.set_font(g.body_face, g.body_size_pt);
            self.cursor_y = g.continuation_start();
        }
    }

    fn body_line(&mut self, text: &str) {
        self.ensure_room();
        self.draw(self.geometry.margin_left_pt, self.cursor_y, text);
        self.cursor_y -= self.geometry.line_height_pt;
    }

    fn blank_line(&mut self) {
        self.cursor_y -= self.geometry.line_height_pt;
    }

    fn finish(mut self) -> Vec<PageLayout> {
        self.finished.push(self.page);
        self.finished
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry point
// ────────────────────────────────────────────────────────────────────────────

/// Lays out `body` under a first-page header.
///
/// Produces at least one page even when `body` is empty.
pub fn paginate(
    body: &str,
    title: &str,
    subtitle: Option<&str>,
    geometry: &PageGeometry,
) -> DocumentLayout {
    let metrics = get_metrics(geometry.body_face);
    let max_width = geometry.usable_width();

    let mut ctx = RenderContext::new(geometry);
    ctx.draw_header(title, subtitle);

    for source_line in body.lines() {
        ctx.ensure_room();

        if source_line.trim().is_empty() {
            ctx.blank_line();
            continue;
        }

        for line in wrap_line(source_line, metrics, geometry.body_size_pt, max_width) {
            ctx.body_line(&line);
        }
    }

    DocumentLayout {
        geometry: geometry.clone(),
        pages: ctx.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::geometry::letter_geometry;

    const TITLE: &str = "Interview Preparation Guide";
    const SUBTITLE: &str = "8 Questions - Senior Level Position";

    fn body_texts(layout: &DocumentLayout) -> Vec<(usize, String)> {
        layout
            .texts()
            .filter(|(_, t)| t.face == FontFace::Helvetica && t.size_pt == 11.0)
            .map(|(page, t)| (page, t.text.clone()))
            .collect()
    }

    #[test]
    fn test_empty_body_produces_single_page_with_header() {
        let layout = paginate("", TITLE, Some(SUBTITLE), &letter_geometry());
        assert_eq!(layout.page_count(), 1);
        let page = &layout.pages[0];
        assert_eq!(page.texts.len(), 2);
        assert_eq!(page.texts[0].text, TITLE);
        assert_eq!(page.texts[0].face, FontFace::HelveticaBold);
        assert_eq!(page.texts[0].y, 720.0);
        assert_eq!(page.texts[1].text, SUBTITLE);
        assert_eq!(page.texts[1].y, 695.0);
        assert_eq!(page.rules.len(), 1);
        assert_eq!(page.rules[0], RuleLine { x1: 72.0, x2: 540.0, y: 675.0 });
    }

    #[test]
    fn test_header_without_subtitle() {
        let layout = paginate("Body", TITLE, None, &letter_geometry());
        let page = &layout.pages[0];
        assert_eq!(page.rules[0].y, 695.0);
        // Body starts 30pt below the separator.
        assert_eq!(page.texts[1].text, "Body");
        assert_eq!(page.texts[1].y, 665.0);
    }

    #[test]
    fn test_empty_subtitle_is_skipped() {
        let layout = paginate("", TITLE, Some(""), &letter_geometry());
        assert_eq!(layout.pages[0].texts.len(), 1);
        assert_eq!(layout.pages[0].rules[0].y, 695.0);
    }

    #[test]
    fn test_body_lines_advance_by_line_height() {
        let layout = paginate("one\ntwo\n\nthree", TITLE, Some(SUBTITLE), &letter_geometry());
        let ys: Vec<f32> = layout.pages[0].texts[2..].iter().map(|t| t.y).collect();
        // 645 → 631, blank line skips 617, "three" at 603.
        assert_eq!(ys, vec![645.0, 631.0, 603.0]);
        assert!(layout.pages[0].texts[2..].iter().all(|t| t.x == 72.0));
    }

    #[test]
    fn test_long_body_paginates_without_dropping_lines() {
        let geometry = letter_geometry();
        let n: usize = 200;
        let body: String = (0..n).map(|i| format!("Line {i}\n")).collect();
        let layout = paginate(&body, TITLE, Some(SUBTITLE), &geometry);

        let per_page = geometry.lines_per_continuation_page();
        assert!(layout.page_count() >= n.div_ceil(per_page));

        let lines = body_texts(&layout);
        assert_eq!(lines.len(), n);
        for (i, (_, text)) in lines.iter().enumerate() {
            assert_eq!(text, &format!("Line {i}"), "line {i} missing or out of order");
        }
    }

    #[test]
    fn test_lines_never_cross_bottom_margin() {
        let geometry = letter_geometry();
        let body = "word ".repeat(5000);
        let layout = paginate(&body, TITLE, None, &geometry);
        assert!(layout.page_count() > 1);
        for (_, t) in layout.texts() {
            assert!(t.y - geometry.line_height_pt >= geometry.margin_bottom_pt);
        }
    }

    #[test]
    fn test_continuation_pages_start_below_top_margin() {
        let geometry = letter_geometry();
        let body: String = (0..120).map(|i| format!("Item {i}\n")).collect();
        let layout = paginate(&body, TITLE, Some(SUBTITLE), &geometry);
        assert!(layout.page_count() >= 2);
        for page in &layout.pages[1..] {
            assert_eq!(page.texts[0].y, geometry.continuation_start());
            assert!(page.rules.is_empty());
        }
    }

    #[test]
    fn test_header_appears_exactly_once_on_first_page() {
        let body = "Question: What is ownership?\nAnswer: A set of rules.\n\n".repeat(80);
        let layout = paginate(&body, TITLE, Some(SUBTITLE), &letter_geometry());
        assert!(layout.page_count() > 2);

        let titles: Vec<usize> = layout
            .texts()
            .filter(|(_, t)| t.text == TITLE)
            .map(|(p, _)| p)
            .collect();
        let subtitles: Vec<usize> = layout
            .texts()
            .filter(|(_, t)| t.text == SUBTITLE)
            .map(|(p, _)| p)
            .collect();
        assert_eq!(titles, vec![0]);
        assert_eq!(subtitles, vec![0]);
    }

    #[test]
    fn test_wrapped_paragraph_stays_within_usable_width() {
        let geometry = letter_geometry();
        let metrics = get_metrics(FontFace::Helvetica);
        let paragraph = "Demonstrate how you prioritised competing stakeholder requests \
                         while keeping delivery predictable and the team motivated. "
            .repeat(5);
        let layout = paginate(&paragraph, TITLE, None, &geometry);
        let lines = body_texts(&layout);
        assert!(lines.len() >= 2);
        for (_, text) in lines {
            assert!(!text.is_empty());
            assert!(metrics.measure_str(&text, 11.0) <= geometry.usable_width());
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        let body = "Strengths\n- Rust\n- Distributed systems\n\nGaps\n- Kubernetes\n".repeat(30);
        let a = paginate(&body, "Skill Gap Analysis Report", Some("Candidate vs Job Requirements"), &letter_geometry());
        let b = paginate(&body, "Skill Gap Analysis Report", Some("Candidate vs Job Requirements"), &letter_geometry());
        assert_eq!(a, b);
    }

    #[test]
    fn test_crlf_line_endings_are_tolerated() {
        let layout = paginate("first\r\nsecond", TITLE, None, &letter_geometry());
        let lines: Vec<String> = body_texts(&layout).into_iter().map(|(_, t)| t).collect();
        assert_eq!(lines, vec!["first", "second"]);
    }
}
