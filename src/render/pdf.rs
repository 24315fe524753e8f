//! PDF emission.
//!
//! Serializes laid-out pages into a PDF byte stream with `pdf-writer`.
//! All glyph placement decisions were already made by the layout engine;
//! this module only translates draw commands into content-stream
//! operators, using the base-14 Helvetica font so nothing needs to be
//! embedded.

use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::model::PageLayout;

use super::metrics::ascent;

const FONT_NAME: &[u8] = b"F1";

/// Map a line of text to PDF string bytes.
///
/// Helvetica without an embedded encoding covers the ASCII range;
/// anything outside it is substituted so the output stays well-formed.
fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
        .collect()
}

/// Serialize laid-out pages to PDF bytes.
pub fn write_pdf(pages: &[PageLayout], font_size: f32) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let font_id = alloc();

    let page_ids: Vec<Ref> = pages.iter().map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = pages.iter().map(|_| alloc()).collect();

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(pages.len() as i32);

    pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

    for (i, page) in pages.iter().enumerate() {
        let mut content = Content::new();

        for cmd in &page.commands {
            let (r, g, b) = cmd.color.to_rgb_f32();
            // Layout y is from the page top; PDF places the baseline from
            // the bottom-left origin.
            let baseline = page.height - cmd.y - ascent(font_size);

            content.begin_text();
            content.set_font(Name(FONT_NAME), font_size);
            content.set_fill_rgb(r, g, b);
            content.next_line(cmd.x, baseline);
            content.show(Str(&encode_text(&cmd.text)));
            content.end_text();
        }

        let raw = content.finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&raw, 6);
        pdf.stream(content_ids[i], &compressed)
            .filter(Filter::FlateDecode);

        let mut page_obj = pdf.page(page_ids[i]);
        page_obj
            .media_box(Rect::new(0.0, 0.0, page.width, page.height))
            .parent(pages_id)
            .contents(content_ids[i]);
        page_obj
            .resources()
            .fonts()
            .pair(Name(FONT_NAME), font_id);
    }

    pdf.finish()
}
