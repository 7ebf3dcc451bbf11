use crate::content::{PageContent, font_resource_name};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use preflight_render_core::RenderError;
use preflight_style::StandardFont;
use preflight_types::Size;
use std::io::Write;

const PRODUCER: &str = concat!("preflight ", env!("CARGO_PKG_VERSION"));

/// Builds the PDF object graph page by page and serializes it on finish.
///
/// The page tree, the shared resource dictionary and the catalog get their
/// object ids up front; page objects are appended as pages complete.
pub struct PdfWriter {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    title: Option<String>,
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfWriter {
    pub fn new() -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();

        let mut font_dict = Dictionary::new();
        for font in StandardFont::ALL {
            let single_font_dict = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(font_resource_name(font).into_bytes(), Object::Dictionary(single_font_dict));
        }
        document
            .objects
            .insert(resources_id, Object::Dictionary(dictionary! { "Font" => font_dict }));

        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            title: None,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Stores a finished page and returns the id of its page object.
    pub fn add_page(&mut self, size: Size, content: PageContent) -> Result<ObjectId, RenderError> {
        let stream = Stream::new(dictionary! {}, content.into_content().encode()?);
        let content_id = self.document.add_object(stream);
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), size.width.into(), size.height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);
        log::trace!("Wrote page {} as object {:?}", self.page_ids.len(), page_id);
        Ok(page_id)
    }

    /// Completes the page tree, catalog and info dictionary and writes the
    /// document to `output`.
    pub fn finish<W: Write>(mut self, output: &mut W) -> Result<(), RenderError> {
        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::Reference(*id)).collect();
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i64,
        };
        self.document.objects.insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self
            .document
            .add_object(dictionary! { "Type" => "Catalog", "Pages" => self.pages_id });
        self.document.trailer.set("Root", catalog_id);

        let created = chrono::Utc::now().format("D:%Y%m%d%H%M%SZ").to_string();
        let mut info = dictionary! {
            "Producer" => Object::string_literal(PRODUCER),
            "CreationDate" => Object::string_literal(created),
        };
        if let Some(title) = &self.title {
            info.set("Title", Object::string_literal(crate::content::to_win_ansi(title)));
        }
        let info_id = self.document.add_object(info);
        self.document.trailer.set("Info", info_id);

        self.document.save_to(output)?;
        output.flush()?;
        log::debug!("PDF document written with {} pages", self.page_ids.len());
        Ok(())
    }
}
