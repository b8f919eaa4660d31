//! Document construction and assembly for the report builders.

use genpdf::elements::Paragraph;
use genpdf::error::Error;
use genpdf::style::Style;
use genpdf::{self, Alignment, Element, Margins, SimplePageDecorator, Size};

use crate::elements::{Spacer, TableWithHeader};
use crate::fonts;
use crate::layout::ColumnLayout;

/// A4 landscape, in millimetres.
const PAPER_WIDTH_MM: f64 = 297.0;
const PAPER_HEIGHT_MM: f64 = 210.0;

const MARGIN_TOP_MM: f64 = 15.0;
const MARGIN_RIGHT_MM: f64 = 10.0;
const MARGIN_BOTTOM_MM: f64 = 15.0;
const MARGIN_LEFT_MM: f64 = 10.0;

const TITLE_FONT_SIZE: u8 = 16;
const DEFAULT_BODY_FONT_SIZE: u8 = 9;

const TITLE_SPACER_MM: f64 = 4.0;
const TABLE_SPACER_MM: f64 = 6.0;

/// Builder for `genpdf::Document` instances pre-configured with the report
/// defaults: the shared font family, landscape A4, and the report margins.
#[derive(Default)]
pub struct DocumentBuilder {
    paper_size: Option<Size>,
    margins: Option<Margins>,
    font_size: Option<u8>,
}

impl DocumentBuilder {
    /// Creates a new builder instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the paper size used for newly created documents.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = Some(paper_size.into());
        self
    }

    /// Sets the margins applied through the page decorator.
    pub fn with_margins(mut self, margins: impl Into<Margins>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    /// Sets the default font size for body content.
    pub fn with_font_size(mut self, font_size: u8) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Builds a fully configured `genpdf::Document` instance.
    pub fn build(self) -> Result<genpdf::Document, Error> {
        let font_family = fonts::shared_font_family()?;
        let mut document = genpdf::Document::new(font_family);

        let paper_size = self
            .paper_size
            .unwrap_or_else(|| Size::new(PAPER_WIDTH_MM, PAPER_HEIGHT_MM));
        document.set_paper_size(paper_size);
        document.set_font_size(self.font_size.unwrap_or(DEFAULT_BODY_FONT_SIZE));

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(self.margins.unwrap_or_else(|| {
            Margins::trbl(
                MARGIN_TOP_MM,
                MARGIN_RIGHT_MM,
                MARGIN_BOTTOM_MM,
                MARGIN_LEFT_MM,
            )
        }));
        document.set_page_decorator(decorator);

        Ok(document)
    }
}

/// One assembled report: title block, optional metadata line, and the data
/// table, rendered to an in-memory PDF.
pub struct TableReport {
    title: String,
    meta: Option<String>,
    layout: ColumnLayout,
    body: Vec<Vec<String>>,
    font_size: u8,
}

impl TableReport {
    /// Creates a report for the given title and column layout.
    pub fn new(title: impl Into<String>, layout: ColumnLayout) -> Self {
        Self {
            title: title.into(),
            meta: None,
            layout,
            body: Vec::new(),
            font_size: DEFAULT_BODY_FONT_SIZE,
        }
    }

    /// Sets the right-aligned metadata line shown under the title.
    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    /// Overrides the body font size.
    pub fn with_font_size(mut self, font_size: u8) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the pre-formatted body rows.
    pub fn with_body(mut self, body: Vec<Vec<String>>) -> Self {
        self.body = body;
        self
    }

    /// Assembles the document and renders it to bytes.
    ///
    /// An empty row-set is padded with one blank row so the table always has
    /// a header and at least one body row.
    pub fn render(self) -> Result<Vec<u8>, Error> {
        let mut document = DocumentBuilder::new()
            .with_font_size(self.font_size)
            .build()?;
        document.set_title(self.title.clone());

        let mut title_style = Style::new();
        title_style.set_bold();
        title_style.set_font_size(TITLE_FONT_SIZE);
        let mut title = Paragraph::new(self.title);
        title.set_alignment(Alignment::Center);
        document.push(title.styled(title_style));

        if let Some(meta) = self.meta {
            document.push(Spacer::new(TITLE_SPACER_MM));
            let mut meta_line = Paragraph::new(meta);
            meta_line.set_alignment(Alignment::Right);
            document.push(meta_line);
        }
        document.push(Spacer::new(TABLE_SPACER_MM));

        document.push(TableWithHeader::new(self.layout, self.body));

        let mut bytes = Vec::new();
        document.render(&mut bytes)?;
        Ok(bytes)
    }
}
