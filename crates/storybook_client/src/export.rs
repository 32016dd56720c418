//! PNG and PDF export of the rendered story.

use std::sync::Arc;
use storybook_error::{PresentationError, PresentationErrorKind, PresentationResult};
use storybook_interface::{
    Download, DownloadSink, PdfAssembler, PdfPage, Rasterizer, StoryView,
};
use tracing::{info, instrument};

/// Export file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// The raster image itself
    Png,
    /// A single page sized to the raster image
    Pdf,
}

impl ExportFormat {
    /// Name of the offered file.
    pub fn filename(&self) -> &'static str {
        match self {
            ExportFormat::Png => "storybook.png",
            ExportFormat::Pdf => "storybook.pdf",
        }
    }

    /// MIME type of the offered file.
    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

/// Rasterizes the story view and offers the result as a download.
pub struct Exporter {
    rasterizer: Arc<dyn Rasterizer>,
    pdf: Option<Arc<dyn PdfAssembler>>,
    downloads: Arc<dyn DownloadSink>,
}

impl Exporter {
    /// PNG-only exporter.
    pub fn new(rasterizer: Arc<dyn Rasterizer>, downloads: Arc<dyn DownloadSink>) -> Self {
        Self {
            rasterizer,
            pdf: None,
            downloads,
        }
    }

    /// Enable PDF export.
    pub fn with_pdf(mut self, pdf: Arc<dyn PdfAssembler>) -> Self {
        self.pdf = Some(pdf);
        self
    }

    /// Whether `format` can be produced.
    pub fn supports(&self, format: ExportFormat) -> bool {
        match format {
            ExportFormat::Png => true,
            ExportFormat::Pdf => self.pdf.is_some(),
        }
    }

    /// Export `view` and offer the file.
    ///
    /// # Errors
    ///
    /// `Unavailable` when PDF export is requested without an assembler.
    /// Any collaborator failure is reported as `RenderFailure`.
    #[instrument(skip(self, view))]
    pub async fn export(
        &self,
        view: &StoryView,
        format: ExportFormat,
    ) -> PresentationResult<Download> {
        let pdf = match format {
            ExportFormat::Pdf => Some(self.pdf.as_ref().ok_or_else(|| {
                PresentationError::new(PresentationErrorKind::Unavailable("PDF export".into()))
            })?),
            ExportFormat::Png => None,
        };

        let image = self.rasterizer.rasterize(view).await.map_err(render_failure)?;

        let bytes = match pdf {
            Some(assembler) => {
                let page = PdfPage::for_image(&image);
                assembler.assemble(&image, &page).map_err(render_failure)?
            }
            None => image.png,
        };

        let download = Download {
            filename: format.filename().to_string(),
            mime: format.mime().to_string(),
            bytes,
        };
        self.downloads
            .offer(download.clone())
            .map_err(render_failure)?;

        info!(filename = %download.filename, bytes = download.bytes.len(), "Story exported");
        Ok(download)
    }
}

fn render_failure(err: PresentationError) -> PresentationError {
    if matches!(err.kind, PresentationErrorKind::RenderFailure(_)) {
        return err;
    }
    PresentationError::new(PresentationErrorKind::RenderFailure(err.kind.to_string()))
}

impl std::fmt::Debug for Exporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exporter")
            .field("pdf", &self.pdf.is_some())
            .finish()
    }
}
