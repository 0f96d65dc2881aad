use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, Pt};

use super::resume_document::{ResumeDocument, ResumeLine};

// A4 in points.
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 56.0;

/// Helvetica averages about half an em per glyph.
const AVG_GLYPH_EM: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Font {
    Regular,
    Bold,
}

struct Style {
    font: Font,
    size: f32,
    indent: f32,
    space_before: f32,
}

fn style(line: &ResumeLine) -> Style {
    let (font, size, indent, space_before) = match line {
        ResumeLine::Title(_) => (Font::Bold, 22.0, 0.0, 0.0),
        ResumeLine::Subtitle(_) => (Font::Regular, 13.0, 0.0, 2.0),
        ResumeLine::Heading(_) => (Font::Bold, 14.0, 0.0, 4.0),
        ResumeLine::Strong(_) => (Font::Bold, 11.0, 0.0, 6.0),
        ResumeLine::Body(_) => (Font::Regular, 10.0, 0.0, 1.0),
        ResumeLine::Bullet(_) => (Font::Regular, 10.0, 12.0, 1.0),
        ResumeLine::Gap => (Font::Regular, 8.0, 0.0, 0.0),
    };
    Style {
        font,
        size,
        indent,
        space_before,
    }
}

/// One text run at a position in points, origin bottom-left.
#[derive(Debug, Clone, PartialEq)]
struct Placed {
    text: String,
    font: Font,
    size: f32,
    x: f32,
    y: f32,
}

/// Greedy word wrap by estimated width. Overlong words are split.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.chars().count() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let head: String = word.chars().take(max_chars).collect();
            word = word.chars().skip(max_chars).collect();
            lines.push(head);
        }

        let needed = current.chars().count() + usize::from(!current.is_empty()) + word.chars().count();
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// The builtin Helvetica faces only cover ASCII reliably.
fn plain_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c,
            'à'..='å' => 'a',
            'À'..='Å' => 'A',
            'è'..='ë' => 'e',
            'È'..='Ë' => 'E',
            'ì'..='ï' => 'i',
            'Ì'..='Ï' => 'I',
            'ò'..='ö' => 'o',
            'Ò'..='Ö' => 'O',
            'ù'..='ü' => 'u',
            'Ù'..='Ü' => 'U',
            'ç' => 'c',
            'Ç' => 'C',
            'ñ' => 'n',
            'Ñ' => 'N',
            '\u{2013}' | '\u{2014}' | '\u{2022}' => '-',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201c}' | '\u{201d}' => '"',
            '\u{a0}' => ' ',
            _ => '?',
        })
        .collect()
}

/// Positions every line on A4 pages. Always at least one page.
fn layout(doc: &ResumeDocument) -> Vec<Vec<Placed>> {
    let mut pages = Vec::new();
    let mut current = Vec::new();
    let mut y = PAGE_HEIGHT - MARGIN;

    for line in &doc.lines {
        let st = style(line);
        let leading = st.size * 1.3;

        let text = match line {
            ResumeLine::Gap => {
                y -= leading;
                continue;
            }
            ResumeLine::Bullet(t) => format!("- {t}"),
            ResumeLine::Title(t)
            | ResumeLine::Subtitle(t)
            | ResumeLine::Heading(t)
            | ResumeLine::Strong(t)
            | ResumeLine::Body(t) => t.clone(),
        };

        let usable = PAGE_WIDTH - 2.0 * MARGIN - st.indent;
        let max_chars = (usable / (st.size * AVG_GLYPH_EM)) as usize;
        y -= st.space_before;

        for row in wrap(&plain_text(&text), max_chars) {
            if y - leading < MARGIN {
                pages.push(std::mem::take(&mut current));
                y = PAGE_HEIGHT - MARGIN;
            }
            y -= leading;
            current.push(Placed {
                text: row,
                font: st.font,
                size: st.size,
                x: MARGIN + st.indent,
                y,
            });
        }
    }

    if !current.is_empty() || pages.is_empty() {
        pages.push(current);
    }
    pages
}

/// Renders a single-column A4 résumé with the builtin Helvetica faces.
pub fn render_pdf(doc: &ResumeDocument) -> Result<Vec<u8>, printpdf::Error> {
    let pages = layout(doc);
    let (width, height) = (Mm::from(Pt(PAGE_WIDTH)), Mm::from(Pt(PAGE_HEIGHT)));

    let (pdf, first_page, first_layer) = PdfDocument::new("Résumé", width, height, "Text");
    let regular = pdf.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = pdf.add_builtin_font(BuiltinFont::HelveticaBold)?;

    for (i, runs) in pages.iter().enumerate() {
        let (page, layer) = if i == 0 {
            (first_page, first_layer)
        } else {
            pdf.add_page(width, height, "Text")
        };
        let layer = pdf.get_page(page).get_layer(layer);

        for run in runs {
            let font: &IndirectFontRef = match run.font {
                Font::Regular => &regular,
                Font::Bold => &bold,
            };
            layer.use_text(
                run.text.as_str(),
                run.size,
                Mm::from(Pt(run.x)),
                Mm::from(Pt(run.y)),
                font,
            );
        }
    }

    pdf.save_to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(count: usize) -> ResumeDocument {
        ResumeDocument {
            lines: (0..count).map(|i| ResumeLine::Body(format!("line {i}"))).collect(),
        }
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn accents_and_punctuation_fold_to_ascii() {
        assert_eq!(plain_text("Résumé — São Paulo"), "Resume - Sao Paulo");
        assert_eq!(plain_text("→"), "?");
    }

    #[test]
    fn layout_places_runs_inside_the_margins() {
        let doc = ResumeDocument {
            lines: vec![
                ResumeLine::Title("Ana Lima".into()),
                ResumeLine::Gap,
                ResumeLine::Bullet("Rust".into()),
            ],
        };
        let pages = layout(&doc);

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0][0].text, "Ana Lima");
        assert_eq!(pages[0][0].font, Font::Bold);
        assert_eq!(pages[0][1].text, "- Rust");
        assert!(pages[0][1].x > pages[0][0].x);
        assert!(pages[0].iter().all(|r| r.y >= MARGIN && r.y < PAGE_HEIGHT - MARGIN));
    }

    #[test]
    fn empty_document_still_has_a_page() {
        assert_eq!(layout(&ResumeDocument { lines: vec![] }).len(), 1);
    }

    #[test]
    fn long_documents_span_pages() {
        let pages = layout(&lines(200));
        assert!(pages.len() > 1);
        assert_eq!(pages.iter().map(Vec::len).sum::<usize>(), 200);
    }

    #[test]
    fn output_is_a_pdf() {
        let bytes = render_pdf(&lines(200)).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"));
    }
}
