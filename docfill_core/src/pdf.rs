//! Minimal PDF serialization for the document export format.
//!
//! Produces a self-contained PDF 1.4 byte stream: document catalog, page
//! tree, the built-in Helvetica face with WinAnsi encoding, and one content
//! stream per page. Pure function of the laid-out pages; no I/O happens
//! here.

use crate::font;
use crate::layout;
use crate::layout::Page;

/// Serialize laid-out pages into PDF bytes. `pages` is never empty
/// ([`layout::paginate`] returns at least one page).
pub(crate) fn write_document(pages: &[Page]) -> Vec<u8> {
	let mut writer = PdfWriter::new();

	let page_width_pt = layout::PAGE_WIDTH_MM * layout::PT_PER_MM;
	let page_height_pt = layout::PAGE_HEIGHT_MM * layout::PT_PER_MM;

	// Fixed object numbering: 1 catalog, 2 page tree, 3 font, then a page
	// object and a content object per page.
	let page_object_id = |index: usize| 4 + 2 * index;
	let content_object_id = |index: usize| 5 + 2 * index;

	let kids: Vec<String> = (0..pages.len())
		.map(|index| format!("{} 0 R", page_object_id(index)))
		.collect();

	writer.add_object(b"<< /Type /Catalog /Pages 2 0 R >>");
	writer.add_object(
		format!(
			"<< /Type /Pages /Kids [{}] /Count {} >>",
			kids.join(" "),
			pages.len()
		)
		.as_bytes(),
	);
	writer.add_object(
		b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
	);

	for (index, page) in pages.iter().enumerate() {
		writer.add_object(
			format!(
				"<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {page_width_pt:.2} \
				 {page_height_pt:.2}] /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
				content_object_id(index)
			)
			.as_bytes(),
		);
		writer.add_stream_object(&content_stream(page));
	}

	debug_assert_eq!(writer.object_count(), content_object_id(pages.len() - 1));
	writer.finish()
}

/// Build the text-drawing operations for one page. Each non-blank line is
/// positioned absolutely at its baseline; blank lines only advance the
/// baseline.
fn content_stream(page: &Page) -> Vec<u8> {
	let mut stream = Vec::new();

	stream.extend_from_slice(b"BT\n");
	stream.extend_from_slice(format!("/F1 {:.0} Tf\n", layout::FONT_SIZE_PT).as_bytes());

	let mut y = layout::FIRST_BASELINE_MM;

	for line in &page.lines {
		if !line.is_empty() {
			let x_pt = layout::MARGIN_MM * layout::PT_PER_MM;
			// PDF origin is the bottom-left corner.
			let y_pt = (layout::PAGE_HEIGHT_MM - y) * layout::PT_PER_MM;

			stream.extend_from_slice(format!("1 0 0 1 {x_pt:.2} {y_pt:.2} Tm\n(").as_bytes());
			push_escaped(&mut stream, line);
			stream.extend_from_slice(b") Tj\n");
		}

		y += layout::LINE_HEIGHT_MM;
	}

	stream.extend_from_slice(b"ET\n");
	stream
}

/// Append `text` as a PDF literal string body, WinAnsi encoded, with the
/// string delimiters and the escape character backslash-escaped.
fn push_escaped(stream: &mut Vec<u8>, text: &str) {
	for c in text.chars() {
		let byte = font::encode_char(c);

		if matches!(byte, b'(' | b')' | b'\\') {
			stream.push(b'\\');
		}

		stream.push(byte);
	}
}

/// Indirect-object accounting: bytes plus the offset of every object for
/// the cross-reference table.
struct PdfWriter {
	buf: Vec<u8>,
	offsets: Vec<usize>,
}

impl PdfWriter {
	fn new() -> Self {
		let mut buf = Vec::new();
		buf.extend_from_slice(b"%PDF-1.4\n");
		// Binary marker comment so transfer tools treat the file as binary.
		buf.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

		Self {
			buf,
			offsets: Vec::new(),
		}
	}

	fn object_count(&self) -> usize {
		self.offsets.len()
	}

	/// Write the next indirect object. Objects are numbered 1.. in call
	/// order.
	fn add_object(&mut self, body: &[u8]) {
		self.offsets.push(self.buf.len());
		let id = self.offsets.len();

		self.buf.extend_from_slice(format!("{id} 0 obj\n").as_bytes());
		self.buf.extend_from_slice(body);
		self.buf.extend_from_slice(b"\nendobj\n");
	}

	/// Write the next indirect object as a stream with its length dictionary.
	fn add_stream_object(&mut self, stream: &[u8]) {
		self.offsets.push(self.buf.len());
		let id = self.offsets.len();

		self.buf.extend_from_slice(
			format!("{id} 0 obj\n<< /Length {} >>\nstream\n", stream.len()).as_bytes(),
		);
		self.buf.extend_from_slice(stream);
		self.buf.extend_from_slice(b"\nendstream\nendobj\n");
	}

	/// Write the cross-reference table and trailer, returning the finished
	/// bytes.
	fn finish(mut self) -> Vec<u8> {
		let xref_offset = self.buf.len();
		let entries = self.offsets.len() + 1;

		self.buf.extend_from_slice(format!("xref\n0 {entries}\n").as_bytes());
		// Entries are exactly 20 bytes each, including the line ending.
		self.buf.extend_from_slice(b"0000000000 65535 f \n");

		for offset in &self.offsets {
			self.buf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
		}

		self.buf.extend_from_slice(
			format!("trailer\n<< /Size {entries} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n")
				.as_bytes(),
		);

		self.buf
	}
}
