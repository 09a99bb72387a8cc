use crate::core::grid::{DrawCommand, TextAnchor, TextBaseline};
use crate::core::logic::DayPanel;
use crate::utils::colors::Rgb;
use crate::utils::formatting::to_win_ansi;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Bezier handle length for a quarter circle.
const KAPPA: f32 = 0.552_284_8;
/// Rough Helvetica advance width, as a fraction of the font size.
const AVG_CHAR_WIDTH: f32 = 0.52;

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a canvas-space drawing lands on the page.
#[derive(Debug, Clone, Copy)]
struct Placement {
    left: f32,
    top: f32,
    scale: f32,
}

impl Placement {
    fn x(&self, x: f64) -> f32 {
        self.left + x as f32 * self.scale
    }

    fn y(&self, y: f64) -> f32 {
        self.top - y as f32 * self.scale
    }

    fn scaled(&self, v: f64) -> f32 {
        v as f32 * self.scale
    }
}

impl PdfManager {
    /// A4 landscape, one or more pages per day.
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 842.0,
            page_h: 595.0,
            margin: 40.0,
            row_h: 18.0,

            next_id,
            font_id,
            bold_font_id,

            font_size: 9.0,
            header_font_size: 10.0,
            title_font_size: 16.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources()
            .fonts()
            .pair(Name(b"F1"), self.font_id)
            .pair(Name(b"F2"), self.bold_font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, bold: bool, text: &str) {
        let font = if bold { Name(b"F2") } else { Name(b"F1") };
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&to_win_ansi(text)));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        font_size: f32,
        bold: bool,
    ) {
        let mut x = self.margin;

        for (text, w) in row.iter().zip(col_widths) {
            self.draw_text(content, x + 4.0, y + 5.0, font_size, bold, text);
            self.draw_cell_borders(content, x, y, *w, self.row_h);
            x += w;
        }
    }

    /// Column widths from header + content, scaled down to the page if needed.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (cell.len() as f32 * 5.6).max(*w);
                }
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, shade: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(shade.0, shade.1, shade.2);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_footer(&self, content: &mut Content, page: usize) {
        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 40.0,
            self.margin - 25.0,
            self.font_size,
            false,
            &pg,
        );
    }

    /// Replay grid commands onto the page, scaled from canvas pixels.
    fn draw_commands(&self, content: &mut Content, commands: &[DrawCommand], at: Placement) {
        for cmd in commands {
            match cmd {
                DrawCommand::Clear { width, height } => {
                    content.save_state();
                    content.set_fill_rgb(1.0, 1.0, 1.0);
                    let (w, h) = (at.scaled(*width as f64), at.scaled(*height as f64));
                    content.rect(at.left, at.top - h, w, h);
                    content.fill_nonzero();
                    content.restore_state();
                }
                DrawCommand::FillRect {
                    x,
                    y,
                    width,
                    height,
                    color,
                    opacity,
                } => {
                    let (r, g, b) = blend_on_white(*color, *opacity);
                    content.save_state();
                    content.set_fill_rgb(r, g, b);
                    content.rect(at.x(*x), at.y(y + height), at.scaled(*width), at.scaled(*height));
                    content.fill_nonzero();
                    content.restore_state();
                }
                DrawCommand::StrokeRect {
                    x,
                    y,
                    width,
                    height,
                    color,
                    line_width,
                } => {
                    let (r, g, b) = color.unit();
                    content.save_state();
                    content.set_stroke_rgb(r, g, b);
                    content.set_line_width(at.scaled(*line_width));
                    content.rect(at.x(*x), at.y(y + height), at.scaled(*width), at.scaled(*height));
                    content.stroke();
                    content.restore_state();
                }
                DrawCommand::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                    line_width,
                } => {
                    let (r, g, b) = color.unit();
                    content.save_state();
                    content.set_stroke_rgb(r, g, b);
                    content.set_line_width(at.scaled(*line_width));
                    content.move_to(at.x(*x1), at.y(*y1));
                    content.line_to(at.x(*x2), at.y(*y2));
                    content.stroke();
                    content.restore_state();
                }
                DrawCommand::Circle { cx, cy, r, color } => {
                    let (cr, cg, cb) = color.unit();
                    content.save_state();
                    content.set_fill_rgb(cr, cg, cb);
                    circle_path(content, at.x(*cx), at.y(*cy), at.scaled(*r));
                    content.fill_nonzero();
                    content.restore_state();
                }
                DrawCommand::Text {
                    x,
                    y,
                    text,
                    size,
                    bold,
                    color,
                    anchor,
                    baseline,
                } => {
                    let size = at.scaled(*size);
                    let width = text.chars().count() as f32 * size * AVG_CHAR_WIDTH;
                    let px = match anchor {
                        TextAnchor::Start => at.x(*x),
                        TextAnchor::Middle => at.x(*x) - width / 2.0,
                        TextAnchor::End => at.x(*x) - width,
                    };
                    let py = match baseline {
                        TextBaseline::Alphabetic => at.y(*y),
                        TextBaseline::Middle => at.y(*y) - size * 0.35,
                    };
                    let (r, g, b) = color.unit();
                    content.save_state();
                    content.set_fill_rgb(r, g, b);
                    self.draw_text(content, px, py, size, *bold, text);
                    content.restore_state();
                }
            }
        }
    }

    /// Title, date, totals, grid and activity table for one day. The table
    /// continues on extra pages when it does not fit.
    pub fn write_day(&mut self, panel: &DayPanel, headers: &[&str], rows: &[Vec<String>]) {
        let mut content = self.new_page();
        let mut page_no = self.page_count();

        let title = format!("Daily Log Sheet - {}", panel.title());
        let mut y = self.page_h - self.margin;
        self.draw_text(&mut content, self.margin, y, self.title_font_size, true, &title);
        y -= 18.0;
        self.draw_text(
            &mut content,
            self.margin,
            y,
            self.header_font_size,
            false,
            &panel.formatted_date,
        );
        y -= 16.0;

        let s = &panel.summary;
        let totals = format!(
            "Driving: {:.2} h    Distance: {:.1} mi    Total on duty: {:.2} h",
            s.driving_time_hours, s.distance_miles, s.total_duty_hours
        );
        self.draw_text(&mut content, self.margin, y, self.font_size, false, &totals);
        y -= 12.0;

        let canvas = panel.grid.canvas;
        let available = self.page_w - 2.0 * self.margin;
        let scale = available / canvas.width.max(1) as f32;
        let placement = Placement {
            left: self.margin,
            top: y,
            scale,
        };
        self.draw_commands(&mut content, &panel.grid.commands, placement);
        y -= canvas.height as f32 * scale + 20.0;

        let col_widths = self.compute_col_widths(headers, rows);
        let table_w: f32 = col_widths.iter().sum();
        let header_row: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

        let mut remaining: &[Vec<String>] = rows;
        loop {
            y -= self.row_h;
            self.fill_band(&mut content, y, table_w, (0.85, 0.87, 0.90));
            self.draw_row(&mut content, y, &col_widths, &header_row, self.header_font_size, true);

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y - self.row_h < self.margin {
                    break;
                }
                y -= self.row_h;

                // zebra stripe
                if i % 2 == 0 {
                    self.fill_band(&mut content, y, table_w, (0.96, 0.96, 0.96));
                }
                self.draw_row(&mut content, y, &col_widths, row, self.font_size, false);
                consumed += 1;
            }

            remaining = &remaining[consumed..];
            self.draw_footer(&mut content, page_no);
            self.finalize_page(content);

            if remaining.is_empty() {
                break;
            }

            content = self.new_page();
            page_no = self.page_count();
            y = self.page_h - self.margin;
            let cont = format!("Daily Log Sheet - {} (continued)", panel.title());
            self.draw_text(&mut content, self.margin, y, self.header_font_size, true, &cont);
            y -= 10.0;
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

fn blend_on_white(color: Rgb, opacity: f64) -> (f32, f32, f32) {
    let a = opacity.clamp(0.0, 1.0) as f32;
    let (r, g, b) = color.unit();
    (r * a + (1.0 - a), g * a + (1.0 - a), b * a + (1.0 - a))
}

fn circle_path(content: &mut Content, cx: f32, cy: f32, r: f32) {
    let k = r * KAPPA;
    content.move_to(cx + r, cy);
    content.cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
    content.cubic_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
    content.cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
    content.cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
    content.close_path();
}
